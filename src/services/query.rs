//! Query service
//!
//! Search and aggregation over the ledger's records. Searches that match
//! nothing return an empty list rather than an error.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::ledger::Ledger;
use crate::models::{Category, ExpenseRecord, Money};

use super::budget::BudgetService;

/// Summary of the ledger as shown in the account statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountStatement {
    pub total_spent: Money,
    pub savings_total: Money,
    pub budget: Option<Money>,
}

/// Service for searching and summarizing expenses
pub struct QueryService<'a> {
    ledger: &'a Ledger,
}

impl<'a> QueryService<'a> {
    /// Create a new query service
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Spending per category
    ///
    /// Every registry category is present, including those with no spending.
    /// Iteration order follows the registry.
    pub fn category_totals(&self) -> BTreeMap<Category, Money> {
        let mut totals: BTreeMap<Category, Money> = Category::ALL
            .iter()
            .map(|c| (*c, Money::zero()))
            .collect();

        for record in self.ledger.snapshot() {
            *totals.entry(record.category()).or_default() += record.amount();
        }

        totals
    }

    /// Sum of all recorded expenses
    pub fn grand_total(&self) -> Money {
        BudgetService::new(self.ledger).total_spent()
    }

    /// Records whose timestamp falls on the given calendar date, in entry order
    pub fn by_date(&self, day: NaiveDate) -> Vec<&'a ExpenseRecord> {
        self.ledger
            .snapshot()
            .iter()
            .filter(|r| r.is_on(day))
            .collect()
    }

    /// Records whose name matches exactly, ignoring case, in entry order
    pub fn by_item_name(&self, name: &str) -> Vec<&'a ExpenseRecord> {
        self.ledger
            .snapshot()
            .iter()
            .filter(|r| r.is_named(name))
            .collect()
    }

    /// Totals spent and saved, plus the budget if one is set
    pub fn account_statement(&self) -> AccountStatement {
        AccountStatement {
            total_spent: self.grand_total(),
            savings_total: self.ledger.savings_total(),
            budget: self.ledger.budget_ceiling(),
        }
    }
}
