//! Budget service
//!
//! Compares cumulative spending against the ledger's budget ceiling.

use serde::Serialize;

use crate::ledger::Ledger;
use crate::models::Money;

/// Result of comparing total spending with the budget ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BudgetStatus {
    /// No budget has been set this session
    Unset,
    /// Spending is at or below the ceiling
    Within { spent: Money, remaining: Money },
    /// Spending is above the ceiling
    Over { spent: Money, excess: Money },
}

impl BudgetStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, Self::Over { .. })
    }
}

/// Service for budget tracking
pub struct BudgetService<'a> {
    ledger: &'a Ledger,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Total of every recorded expense
    pub fn total_spent(&self) -> Money {
        self.ledger.snapshot().iter().map(|r| r.amount()).sum()
    }

    /// Current budget status
    pub fn status(&self) -> BudgetStatus {
        let Some(budget) = self.ledger.budget_ceiling() else {
            return BudgetStatus::Unset;
        };

        let spent = self.total_spent();
        if spent > budget {
            BudgetStatus::Over {
                spent,
                excess: spent - budget,
            }
        } else {
            BudgetStatus::Within {
                spent,
                remaining: budget - spent,
            }
        }
    }
}
