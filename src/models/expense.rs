//! Expense record model
//!
//! An expense is one spending event. Records are immutable once created;
//! the ledger only ever appends them or clears them all at once.

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::{Money, MAX_AMOUNT};

/// Format of the persisted `date` field
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format of the date portion used for date searches
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single spending event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(deserialize_with = "trimmed")]
    name: String,
    amount: Money,
    #[serde(with = "timestamp")]
    date: NaiveDateTime,
    category: Category,
}

impl ExpenseRecord {
    /// Create a record stamped with the current local time
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        category: Category,
    ) -> Result<Self, ExpenseValidationError> {
        Self::with_date(name, amount, category, now())
    }

    /// Create a record with an explicit timestamp, truncated to whole seconds
    pub fn with_date(
        name: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDateTime,
    ) -> Result<Self, ExpenseValidationError> {
        let record = Self {
            name: name.into().trim().to_string(),
            amount,
            date: date.with_nanosecond(0).unwrap_or(date),
            category,
        };
        record.validate()?;
        Ok(record)
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if !self.amount.is_within_limit() {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The timestamp exactly as persisted, e.g. "2024-01-15 10:30:00"
    pub fn timestamp(&self) -> String {
        self.date.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Whether the persisted timestamp starts with the given calendar date
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.timestamp()
            .starts_with(&day.format(DATE_FORMAT).to_string())
    }

    /// Case-insensitive exact name comparison
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) on {}",
            self.name,
            self.amount,
            self.category,
            self.timestamp()
        )
    }
}

/// Current local time at second precision
fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Parse a `YYYY-MM-DD` string into a calendar date
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Expense amount {} exceeds the limit of {}", amount, MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

impl From<ExpenseValidationError> for crate::error::SpentSmartError {
    fn from(err: ExpenseValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Names are stored trimmed, whatever the source file holds
fn trimmed<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let name = String::deserialize(deserializer)?;
    Ok(name.trim().to_string())
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
