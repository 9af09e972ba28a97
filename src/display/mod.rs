//! Display formatting for terminal output
//!
//! Turns ledger query results into tables and status lines. Nothing here
//! computes totals; callers pass in what the services returned.

pub mod expense;
pub mod report;

pub use expense::{format_category_menu, format_expense_table};
pub use report::{
    format_account_statement, format_budget_status, format_category_totals, format_grand_total,
};
