//! Expense repository for JSON storage
//!
//! The data file is a bare JSON array of expense objects, each with exactly
//! `name`, `amount`, `date` and `category`.

use std::path::{Path, PathBuf};

use crate::error::{SpentSmartError, SpentSmartResult};
use crate::models::ExpenseRecord;

use super::file_io::{read_json, write_json_atomic};

/// Loads and saves the full list of expense records
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record in file order
    ///
    /// A missing file is a first run and yields no records. A record that
    /// breaks the model's rules (blank name, non-positive amount) is rejected.
    pub fn load(&self) -> SpentSmartResult<Vec<ExpenseRecord>> {
        let records: Vec<ExpenseRecord> = read_json(&self.path)?;

        for (i, record) in records.iter().enumerate() {
            record.validate().map_err(|e| {
                SpentSmartError::Storage(format!(
                    "Invalid record #{} in {}: {}",
                    i + 1,
                    self.path.display(),
                    e
                ))
            })?;
        }

        Ok(records)
    }

    /// Overwrite the file with the given records
    pub fn save(&self, records: &[ExpenseRecord]) -> SpentSmartResult<()> {
        write_json_atomic(&self.path, records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{expense::TIMESTAMP_FORMAT, Category, Money};
    use chrono::NaiveDateTime;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        (temp_dir, repo)
    }

    fn record(name: &str, cents: i64, category: Category, at: &str) -> ExpenseRecord {
        let date = NaiveDateTime::parse_from_str(at, TIMESTAMP_FORMAT).unwrap();
        ExpenseRecord::with_date(name, Money::from_cents(cents), category, date).unwrap()
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (_temp_dir, repo) = create_test_repo();
        let records = vec![
            record("Rent", 1_500_00, Category::Bills, "2024-03-01 09:00:00"),
            record("Cinema", 12_50, Category::Entertainment, "2024-02-28 21:15:00"),
            record("Taxi", 8_75, Category::Transport, "2024-03-01 23:59:59"),
        ];

        repo.save(&records).unwrap();
        assert_eq!(repo.load().unwrap(), records);
    }

    #[test]
    fn test_save_overwrites() {
        let (_temp_dir, repo) = create_test_repo();
        repo.save(&[record("Old", 100, Category::Others, "2024-01-01 00:00:00")])
            .unwrap();
        repo.save(&[]).unwrap();

        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_reads_plain_array_format() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::write(
            repo.path(),
            r#"[{"name": "Tea", "amount": 20.0, "date": "2024-05-05 07:30:00", "category": "Groceries"},
                {"name": "Bus", "amount": 15, "date": "2024-05-05 08:00:00", "category": "Transport"}]"#,
        )
        .unwrap();

        let records = repo.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].amount(), Money::from_units(20));
        assert_eq!(records[1].category(), Category::Transport);
    }

    #[test]
    fn test_rejects_unknown_category() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::write(
            repo.path(),
            r#"[{"name": "Tea", "amount": 2, "date": "2024-05-05 07:30:00", "category": "Snacks"}]"#,
        )
        .unwrap();

        assert!(matches!(repo.load(), Err(SpentSmartError::Storage(_))));
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::write(
            repo.path(),
            r#"[{"name": "Tea", "amount": -2, "date": "2024-05-05 07:30:00", "category": "Groceries"}]"#,
        )
        .unwrap();

        let err = repo.load().unwrap_err();
        assert!(err.to_string().contains("record #1"));
    }

    #[test]
    fn test_rejects_blank_name() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::write(
            repo.path(),
            r#"[{"name": "   ", "amount": 2, "date": "2024-05-05 07:30:00", "category": "Groceries"}]"#,
        )
        .unwrap();

        let err = repo.load().unwrap_err();
        assert!(matches!(err, SpentSmartError::Storage(_)));
        assert!(err.to_string().contains("name cannot be empty"));
    }

    #[test]
    fn test_padded_names_are_trimmed_and_searchable() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::write(
            repo.path(),
            r#"[{"name": "Coffee ", "amount": 3, "date": "2024-05-05 07:30:00", "category": "Groceries"}]"#,
        )
        .unwrap();

        let mut ledger = crate::ledger::Ledger::new();
        ledger.restore(repo.load().unwrap()).unwrap();
        assert_eq!(ledger.snapshot()[0].name(), "Coffee");

        let found = crate::services::QueryService::new(&ledger).by_item_name("coffee");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_rejects_amount_over_limit() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::write(
            repo.path(),
            r#"[{"name": "Tea", "amount": 90000000000000000, "date": "2024-05-05 07:30:00", "category": "Groceries"}]"#,
        )
        .unwrap();

        assert!(matches!(repo.load(), Err(SpentSmartError::Storage(_))));
    }
}
