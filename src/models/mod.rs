//! Core data models for SpentSmart
//!
//! This module contains the data structures of the expense domain:
//! money amounts, the fixed category registry, and expense records.

pub mod category;
pub mod expense;
pub mod money;

pub use category::Category;
pub use expense::{parse_date, ExpenseRecord, ExpenseValidationError};
pub use money::{Money, MoneyParseError, MAX_AMOUNT};
