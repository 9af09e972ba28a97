//! Service layer for SpentSmart
//!
//! Services are read-only views over a `Ledger`. Every call recomputes its
//! result from the current records, so nothing derived is ever stored.

pub mod budget;
pub mod query;

pub use budget::{BudgetService, BudgetStatus};
pub use query::{AccountStatement, QueryService};
