//! Storage layer for SpentSmart
//!
//! Ties the expense data file and the audit log to the resolved paths. The
//! ledger itself never sees a path; it is loaded from and saved through
//! `Storage`.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger, EntityType, Operation};
use crate::config::paths::SpentSmartPaths;
use crate::config::settings::Settings;
use crate::error::{SpentSmartError, SpentSmartResult};
use crate::ledger::Ledger;
use crate::models::{ExpenseRecord, Money};

/// Main storage coordinator
pub struct Storage {
    paths: SpentSmartPaths,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: SpentSmartPaths, settings: &Settings) -> SpentSmartResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file(&settings.data_file_name)),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &SpentSmartPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Build a ledger from the persisted records
    ///
    /// Savings and budget are not persisted and start empty.
    pub fn load_ledger(&self) -> SpentSmartResult<Ledger> {
        let mut ledger = Ledger::new();
        ledger.restore(self.expenses.load()?).map_err(|e| {
            SpentSmartError::Storage(format!("{}: {}", self.expenses.path().display(), e))
        })?;
        Ok(ledger)
    }

    /// Persist the ledger's records, overwriting the data file
    pub fn save_ledger(&self, ledger: &Ledger) -> SpentSmartResult<()> {
        self.expenses.save(ledger.snapshot())?;
        self.audit.log(&AuditEntry::note(
            Operation::Save,
            EntityType::Ledger,
            format!(
                "{} records saved to {}",
                ledger.len(),
                self.expenses.path().display()
            ),
        ))
    }

    /// Audit a newly recorded expense
    pub fn log_expense(&self, record: &ExpenseRecord) -> SpentSmartResult<()> {
        self.audit.log(&AuditEntry::create(
            EntityType::Expense,
            Some(record.name().to_string()),
            record,
        ))
    }

    /// Audit a change to the savings total
    pub fn log_savings(&self, before: Money, after: Money) -> SpentSmartResult<()> {
        self.audit.log(&AuditEntry::update(
            EntityType::Savings,
            &before,
            &after,
            Some(format!("savings: {} -> {}", before, after)),
        ))
    }

    /// Audit a change to the budget ceiling
    pub fn log_budget(&self, before: Option<Money>, after: Money) -> SpentSmartResult<()> {
        let previous = before.map_or_else(|| "not set".to_string(), |m| m.to_string());
        self.audit.log(&AuditEntry::update(
            EntityType::Budget,
            &before,
            &Some(after),
            Some(format!("budget: {} -> {}", previous, after)),
        ))
    }

    /// Audit a full reset, keeping what was cleared
    pub fn log_reset(&self, cleared: &Ledger) -> SpentSmartResult<()> {
        let before = serde_json::json!({
            "records": cleared.snapshot(),
            "savings_total": cleared.savings_total(),
            "budget": cleared.budget_ceiling(),
        });
        self.audit.log(&AuditEntry::delete(EntityType::Ledger, &before))
    }

    /// Audit an export to an external file
    pub fn log_export(&self, description: impl Into<String>) -> SpentSmartResult<()> {
        self.audit
            .log(&AuditEntry::note(Operation::Export, EntityType::Ledger, description))
    }
}
