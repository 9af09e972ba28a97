//! Configuration module for SpentSmart
//!
//! This module provides configuration management including:
//! - Platform-appropriate path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpentSmartPaths;
pub use settings::Settings;
