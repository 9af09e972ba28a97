//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, ExpenseRecord};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
}

/// Format expenses as a table, in the order given
///
/// Returns `None` when there is nothing to show so callers can print their
/// own "no results" message.
pub fn format_expense_table<'a>(
    records: impl IntoIterator<Item = &'a ExpenseRecord>,
    currency_symbol: &str,
) -> Option<String> {
    let rows: Vec<ExpenseRow> = records
        .into_iter()
        .map(|r| ExpenseRow {
            name: r.name().to_string(),
            amount: r.amount().format_with_symbol(currency_symbol),
            date: r.timestamp(),
            category: r.category().to_string(),
        })
        .collect();

    if rows.is_empty() {
        return None;
    }

    Some(Table::new(rows).with(Style::ascii()).to_string())
}

/// Numbered list of categories for menu selection
pub fn format_category_menu() -> String {
    Category::categories()
        .iter()
        .map(|c| format!("{}. {}", c.index(), c))
        .collect::<Vec<_>>()
        .join("\n")
}
