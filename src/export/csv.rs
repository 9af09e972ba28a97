//! CSV Export functionality
//!
//! Writes one row per expense with the columns `name,amount,date,category`.

use std::io::Write;

use crate::error::{SpentSmartError, SpentSmartResult};
use crate::models::ExpenseRecord;

/// Column headers, in the order of the persisted record fields
pub const CSV_HEADERS: [&str; 4] = ["name", "amount", "date", "category"];

/// Export expenses to CSV in entry order
pub fn export_expenses_csv<W: Write>(
    records: &[ExpenseRecord],
    writer: &mut W,
) -> SpentSmartResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADERS)
        .map_err(|e| SpentSmartError::Export(e.to_string()))?;

    for record in records {
        csv_writer
            .write_record([
                record.name().to_string(),
                record.amount().to_decimal_string(),
                record.timestamp(),
                record.category().to_string(),
            ])
            .map_err(|e| SpentSmartError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SpentSmartError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{expense::TIMESTAMP_FORMAT, Category, Money};
    use chrono::NaiveDateTime;

    fn record(name: &str, cents: i64, category: Category, at: &str) -> ExpenseRecord {
        let date = NaiveDateTime::parse_from_str(at, TIMESTAMP_FORMAT).unwrap();
        ExpenseRecord::with_date(name, Money::from_cents(cents), category, date).unwrap()
    }

    #[test]
    fn test_csv_export() {
        let records = vec![
            record("Milk", 4_50, Category::Groceries, "2024-01-15 10:30:00"),
            record("Dinner, with friends", 60_00, Category::Entertainment, "2024-01-15 20:00:00"),
        ];

        let mut output = Vec::new();
        export_expenses_csv(&records, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        let lines: Vec<_> = csv_string.lines().collect();
        assert_eq!(lines[0], "name,amount,date,category");
        assert_eq!(lines[1], "Milk,4.50,2024-01-15 10:30:00,Groceries");
        assert_eq!(
            lines[2],
            "\"Dinner, with friends\",60.00,2024-01-15 20:00:00,Entertainment"
        );
    }

    #[test]
    fn test_csv_reads_back_one_row_per_record() {
        let records = vec![
            record("Bus", 2_00, Category::Transport, "2024-02-01 08:00:00"),
            record("Water", 30_00, Category::Bills, "2024-02-02 08:00:00"),
            record("Gift", 25_00, Category::Others, "2024-02-03 08:00:00"),
        ];

        let mut output = Vec::new();
        export_expenses_csv(&records, &mut output).unwrap();

        let mut reader = ::csv::Reader::from_reader(output.as_slice());
        let rows: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][0], "Water");
        assert_eq!(&rows[2][3], "Others");
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let mut output = Vec::new();
        export_expenses_csv(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "name,amount,date,category\n");
    }
}
