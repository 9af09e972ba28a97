//! YAML Export functionality
//!
//! Writes the same document as the JSON export, in human-readable form.

use std::io::Write;

use crate::error::{SpentSmartError, SpentSmartResult};
use crate::export::json::FullExport;
use crate::ledger::Ledger;

/// Export the ledger to YAML format
pub fn export_full_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> SpentSmartResult<()> {
    let export = FullExport::from_ledger(ledger);

    write!(
        writer,
        "# SpentSmart Expense Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    )
    .map_err(|e| SpentSmartError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SpentSmartError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> SpentSmartResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| SpentSmartError::Import(e.to_string()))?;

    export.validate().map_err(SpentSmartError::Import)?;

    Ok(export)
}
