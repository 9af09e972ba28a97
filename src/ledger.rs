//! The ledger: all mutable state of a session
//!
//! A `Ledger` owns the ordered expense records, the savings total and the
//! optional budget ceiling. It is an ordinary value; the caller creates one,
//! fills it from storage, and passes it to services by reference.

use crate::error::{SpentSmartError, SpentSmartResult};
use crate::models::{Category, ExpenseRecord, Money, MAX_AMOUNT};

/// Session state of the expense ledger
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
    savings_total: Money,
    budget_ceiling: Option<Money>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new expense stamped with the current time
    ///
    /// Returns the stored record. Fails when the name is blank, the amount
    /// is not strictly positive or above the limit, or the total spent would
    /// no longer be representable.
    pub fn add_expense(
        &mut self,
        name: &str,
        amount: Money,
        category: Category,
    ) -> SpentSmartResult<ExpenseRecord> {
        let record = ExpenseRecord::new(name, amount, category)?;
        total_of(&self.records)
            .and_then(|total| total.checked_add(amount))
            .ok_or_else(|| {
                SpentSmartError::invalid_amount("Expense amount", "would overflow the total spent")
            })?;
        self.records.push(record.clone());
        Ok(record)
    }

    /// Add a contribution to savings, returning the new total
    pub fn add_to_savings(&mut self, amount: Money) -> SpentSmartResult<Money> {
        if !amount.is_positive() {
            return Err(SpentSmartError::invalid_amount(
                "Savings contribution",
                format!("must be positive, got {}", amount),
            ));
        }
        self.savings_total = self.savings_total.checked_add(amount).ok_or_else(|| {
            SpentSmartError::invalid_amount("Savings contribution", "would overflow the savings total")
        })?;
        Ok(self.savings_total)
    }

    /// Set the budget ceiling
    ///
    /// The ceiling may be below what has already been spent.
    pub fn set_budget(&mut self, amount: Money) -> SpentSmartResult<()> {
        if amount.is_negative() {
            return Err(SpentSmartError::invalid_amount(
                "Budget",
                format!("cannot be negative, got {}", amount),
            ));
        }
        if !amount.is_within_limit() {
            return Err(SpentSmartError::invalid_amount(
                "Budget",
                format!("cannot exceed {}, got {}", MAX_AMOUNT, amount),
            ));
        }
        self.budget_ceiling = Some(amount);
        Ok(())
    }

    /// Clear records, savings and budget
    pub fn reset_all(&mut self) {
        self.records.clear();
        self.savings_total = Money::zero();
        self.budget_ceiling = None;
    }

    /// Read-only view of the records in entry order
    pub fn snapshot(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Replace the records wholesale, leaving savings and budget untouched
    ///
    /// Rejects a set of records whose total cannot be represented.
    pub fn restore(&mut self, records: Vec<ExpenseRecord>) -> SpentSmartResult<()> {
        if total_of(&records).is_none() {
            return Err(SpentSmartError::Validation(format!(
                "Total of {} records is too large",
                records.len()
            )));
        }
        self.records = records;
        Ok(())
    }

    pub fn savings_total(&self) -> Money {
        self.savings_total
    }

    pub fn budget_ceiling(&self) -> Option<Money> {
        self.budget_ceiling
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn total_of(records: &[ExpenseRecord]) -> Option<Money> {
    Money::checked_sum(records.iter().map(|r| r.amount()))
}
