//! JSON Export functionality
//!
//! Exports the expense records with summary metadata and schema versioning.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SpentSmartError, SpentSmartResult};
use crate::ledger::Ledger;
use crate::models::{Category, ExpenseRecord, Money};
use crate::services::QueryService;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expense records in entry order
    pub expenses: Vec<ExpenseRecord>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,

    /// Earliest expense timestamp
    pub earliest_expense: Option<String>,

    /// Latest expense timestamp
    pub latest_expense: Option<String>,

    pub grand_total: Money,

    pub category_totals: BTreeMap<Category, Money>,
}

impl FullExport {
    /// Build an export document from the ledger's records
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let query = QueryService::new(ledger);
        let expenses = ledger.snapshot().to_vec();

        let earliest_expense = expenses.iter().min_by_key(|r| r.date()).map(|r| r.timestamp());
        let latest_expense = expenses.iter().max_by_key(|r| r.date()).map(|r| r.timestamp());

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            earliest_expense,
            latest_expense,
            grand_total: query.grand_total(),
            category_totals: query.category_totals(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            metadata,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.metadata.expense_count != self.expenses.len() {
            return Err(format!(
                "Expense count mismatch: metadata says {}, found {}",
                self.metadata.expense_count,
                self.expenses.len()
            ));
        }

        for (i, expense) in self.expenses.iter().enumerate() {
            expense
                .validate()
                .map_err(|e| format!("Expense #{}: {}", i + 1, e))?;
        }

        let total = Money::checked_sum(self.expenses.iter().map(|r| r.amount()))
            .ok_or_else(|| "Expense total is too large".to_string())?;
        if total != self.metadata.grand_total {
            return Err(format!(
                "Grand total mismatch: metadata says {}, records sum to {}",
                self.metadata.grand_total, total
            ));
        }

        Ok(())
    }
}

/// Export the ledger to JSON
pub fn export_full_json<W: Write>(
    ledger: &Ledger,
    writer: &mut W,
    pretty: bool,
) -> SpentSmartResult<()> {
    let export = FullExport::from_ledger(ledger);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| SpentSmartError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export (for verification)
pub fn import_from_json(json_str: &str) -> SpentSmartResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| SpentSmartError::Import(e.to_string()))?;

    export.validate().map_err(SpentSmartError::Import)?;

    Ok(export)
}
