//! CLI command handlers
//!
//! This module contains the interactive menu and the one-shot commands,
//! bridging the clap argument parsing with the ledger and services.

pub mod export;
pub mod history;
pub mod menu;

pub use export::{export_ledger, handle_export_command, ExportFormat};
pub use history::handle_history_command;
pub use menu::{MenuSession, SessionOutcome};
