//! Export module for SpentSmart
//!
//! One-way exports of the expense records:
//! - CSV: one row per expense, for spreadsheets
//! - JSON: records plus summary metadata, machine-readable
//! - YAML: the same document as JSON, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
