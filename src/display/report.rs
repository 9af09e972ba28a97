//! Report formatting for terminal output
//!
//! Category totals, the account statement and budget status lines.

use std::collections::BTreeMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, Money};
use crate::services::{AccountStatement, BudgetStatus};

#[derive(Tabled)]
struct TotalRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
}

#[derive(Tabled)]
struct StatementRow {
    #[tabled(rename = "Description")]
    description: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format per-category totals, one row per category
pub fn format_category_totals(totals: &BTreeMap<Category, Money>, currency_symbol: &str) -> String {
    let rows = totals.iter().map(|(category, total)| TotalRow {
        category: category.to_string(),
        total: total.format_with_symbol(currency_symbol),
    });

    Table::new(rows).with(Style::ascii()).to_string()
}

/// Format the grand total as a single-row table
pub fn format_grand_total(total: Money, currency_symbol: &str) -> String {
    let row = TotalRow {
        category: "Grand Total".to_string(),
        total: total.format_with_symbol(currency_symbol),
    };

    Table::new([row]).with(Style::ascii()).to_string()
}

/// Format the account statement summary
pub fn format_account_statement(statement: &AccountStatement, currency_symbol: &str) -> String {
    let budget = statement
        .budget
        .map_or_else(|| "Not Set".to_string(), |b| b.format_with_symbol(currency_symbol));

    let rows = [
        StatementRow {
            description: "Total Spent",
            amount: statement.total_spent.format_with_symbol(currency_symbol),
        },
        StatementRow {
            description: "Savings",
            amount: statement.savings_total.format_with_symbol(currency_symbol),
        },
        StatementRow {
            description: "Budget",
            amount: budget,
        },
    ];

    Table::new(rows).with(Style::ascii()).to_string()
}

/// One-line description of the budget status
pub fn format_budget_status(status: &BudgetStatus, currency_symbol: &str) -> String {
    match status {
        BudgetStatus::Unset => "No budget set. Please set a budget first.".to_string(),
        BudgetStatus::Over { excess, .. } => format!(
            "Warning: You have exceeded your budget by {}",
            excess.format_with_symbol(currency_symbol)
        ),
        BudgetStatus::Within { spent, remaining } => format!(
            "Total spent: {}. You are within your budget ({} remaining).",
            spent.format_with_symbol(currency_symbol),
            remaining.format_with_symbol(currency_symbol)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_totals_lists_every_category() {
        let totals: BTreeMap<_, _> = Category::ALL
            .iter()
            .map(|c| (*c, Money::zero()))
            .collect();

        let table = format_category_totals(&totals, "₹");
        for category in Category::ALL {
            assert!(table.contains(category.name()));
        }
        assert!(table.contains("₹0.00"));
    }

    #[test]
    fn test_grand_total() {
        let table = format_grand_total(Money::from_units(1200), "$");
        assert!(table.contains("Grand Total"));
        assert!(table.contains("$1200.00"));
    }

    #[test]
    fn test_account_statement_without_budget() {
        let statement = AccountStatement {
            total_spent: Money::from_units(59),
            savings_total: Money::from_units(100),
            budget: None,
        };

        let table = format_account_statement(&statement, "₹");
        assert!(table.contains("Total Spent"));
        assert!(table.contains("₹100.00"));
        assert!(table.contains("Not Set"));
    }

    #[test]
    fn test_budget_status_lines() {
        let over = BudgetStatus::Over {
            spent: Money::from_units(1200),
            excess: Money::from_units(200),
        };
        assert_eq!(
            format_budget_status(&over, "₹"),
            "Warning: You have exceeded your budget by ₹200.00"
        );

        let within = BudgetStatus::Within {
            spent: Money::from_units(800),
            remaining: Money::from_units(200),
        };
        assert_eq!(
            format_budget_status(&within, "₹"),
            "Total spent: ₹800.00. You are within your budget (₹200.00 remaining)."
        );

        assert!(format_budget_status(&BudgetStatus::Unset, "₹").starts_with("No budget set"));
    }
}
