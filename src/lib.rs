//! SpentSmart - Terminal-based personal expense tracker
//!
//! This library provides the core functionality for the SpentSmart expense
//! tracker: recording expenses by category, tracking spending against a
//! budget, a running savings total and JSON persistence.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expense records)
//! - `ledger`: The in-memory session state
//! - `services`: Budget tracking and queries over the ledger
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `export`: CSV, JSON and YAML exports
//! - `display`: Table rendering for the terminal
//! - `cli`: The interactive menu and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spentsmart::config::{paths::SpentSmartPaths, settings::Settings};
//! use spentsmart::storage::Storage;
//!
//! let paths = SpentSmartPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! let ledger = storage.load_ledger()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{SpentSmartError, SpentSmartResult};
pub use ledger::Ledger;
