//! CLI commands for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::{SpentSmartError, SpentSmartResult};
use crate::export::{csv, json, yaml};
use crate::ledger::Ledger;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One row per expense, for spreadsheets
    Csv,
    /// Records plus summary metadata
    Json,
    /// Records plus summary metadata, human-readable
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }
}

/// Write the ledger's records to `path` in the given format and audit it
pub fn export_ledger(
    storage: &Storage,
    ledger: &Ledger,
    format: ExportFormat,
    path: &Path,
) -> SpentSmartResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            SpentSmartError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        SpentSmartError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => csv::export_expenses_csv(ledger.snapshot(), &mut writer)?,
        ExportFormat::Json => json::export_full_json(ledger, &mut writer, true)?,
        ExportFormat::Yaml => yaml::export_full_yaml(ledger, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| SpentSmartError::Export(e.to_string()))?;

    storage.log_export(format!(
        "{} records exported as {} to {}",
        ledger.len(),
        format.extension(),
        path.display()
    ))
}

/// Handle the `export` command over the persisted records
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> SpentSmartResult<PathBuf> {
    let ledger = storage.load_ledger()?;
    let path = output.unwrap_or_else(|| {
        storage
            .paths()
            .export_dir()
            .join(format!("expenses.{}", format.extension()))
    });

    export_ledger(storage, &ledger, format, &path)?;
    println!("{} expenses exported to: {}", ledger.len(), path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::{paths::SpentSmartPaths, settings::Settings};
    use crate::models::{Category, Money};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpentSmartPaths::with_base_dir(temp_dir.path());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_persisted_records_to_default_path() {
        let (_temp_dir, storage) = create_test_storage();
        let mut ledger = Ledger::new();
        ledger
            .add_expense("Internet", Money::from_units(45), Category::Bills)
            .unwrap();
        storage.save_ledger(&ledger).unwrap();

        let path = handle_export_command(&storage, ExportFormat::Json, None).unwrap();

        assert_eq!(path, storage.paths().export_dir().join("expenses.json"));
        let imported = json::import_from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(imported.expenses, ledger.snapshot());

        let last = storage.audit().read_recent(1).unwrap();
        assert_eq!(last[0].operation, Operation::Export);
    }

    #[test]
    fn test_export_to_custom_path() {
        let (temp_dir, storage) = create_test_storage();
        let target = temp_dir.path().join("out").join("ledger.yaml");

        let path =
            handle_export_command(&storage, ExportFormat::Yaml, Some(target.clone())).unwrap();

        assert_eq!(path, target);
        let contents = std::fs::read_to_string(&target).unwrap();
        assert!(contents.contains("expense_count: 0"));
    }
}
