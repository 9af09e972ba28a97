//! Interactive menu session
//!
//! Drives the numbered text menu over any reader/writer pair so the whole
//! session can be scripted in tests. The session owns the `Ledger` for its
//! lifetime and hands it back when it ends.

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display;
use crate::error::{SpentSmartError, SpentSmartResult};
use crate::ledger::Ledger;
use crate::models::{parse_date, Category, Money};
use crate::services::{BudgetService, QueryService};
use crate::storage::Storage;

use super::export::{export_ledger, ExportFormat};

const MAIN_MENU: &str = "\
1. Add expense
2. Search expenses (by date or item)
3. Set budget and track
4. Add to savings
5. Account Statement
6. Save and Exit
7. Reset
8. Export to spreadsheet (CSV)";

/// How a menu session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user chose "Save and Exit"
    Saved,
    /// Input ended before the user saved
    Abandoned,
}

enum Flow {
    Continue,
    Exit,
    EndOfInput,
}

/// An interactive session over a ledger
pub struct MenuSession<'a, R, W> {
    ledger: Ledger,
    storage: &'a Storage,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    /// Create a session over an already-loaded ledger
    pub fn new(
        ledger: Ledger,
        storage: &'a Storage,
        settings: &'a Settings,
        input: R,
        output: W,
    ) -> Self {
        Self {
            ledger,
            storage,
            settings,
            input,
            output,
        }
    }

    /// The ledger as it currently stands
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Consume the session, returning the ledger
    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Run the menu until the user saves or input runs out
    ///
    /// Validation errors are reported and the menu is shown again. Storage
    /// and I/O errors end the session.
    pub fn run(&mut self) -> SpentSmartResult<SessionOutcome> {
        loop {
            writeln!(self.output, "\nMain Menu\n{}", MAIN_MENU)?;
            let Some(choice) = self.prompt("Enter choice: ")? else {
                return Ok(SessionOutcome::Abandoned);
            };

            let result = match choice.as_str() {
                "1" => self.add_expenses(),
                "2" => self.search(),
                "3" => self.budget(),
                "4" => self.add_to_savings(),
                "5" => self.account_statement(),
                "6" => self.save(),
                "7" => self.reset(),
                "8" => self.export_csv(),
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Ok(Flow::Continue)
                }
            };

            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(SessionOutcome::Saved),
                Ok(Flow::EndOfInput) => return Ok(SessionOutcome::Abandoned),
                Err(e) if e.is_validation() => writeln!(self.output, "Error: {}", e)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> SpentSmartResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    fn prompt_amount(&mut self, message: &str) -> SpentSmartResult<Option<Money>> {
        let message = format!("{}{}", message, self.symbol());
        match self.prompt(&message)? {
            Some(text) => Ok(Some(Money::parse(&text)?)),
            None => Ok(None),
        }
    }

    fn add_expenses(&mut self) -> SpentSmartResult<Flow> {
        loop {
            let Some(name) = self.prompt("Enter expense name: ")? else {
                return Ok(Flow::EndOfInput);
            };
            let Some(amount) = self.prompt_amount("Enter expense amount: ")? else {
                return Ok(Flow::EndOfInput);
            };

            writeln!(
                self.output,
                "\nChoose a category:\n{}",
                display::format_category_menu()
            )?;
            let Some(selection) = self.prompt("Enter category number: ")? else {
                return Ok(Flow::EndOfInput);
            };
            let index: usize = selection.parse().map_err(|_| {
                SpentSmartError::Validation(format!("Invalid category number: {}", selection))
            })?;
            let category = Category::by_index(index)?;

            let record = self.ledger.add_expense(&name, amount, category)?;
            self.storage.log_expense(&record)?;
            writeln!(self.output, "Added expense: {}", record)?;

            writeln!(self.output, "1. Add another expense\n2. Skip")?;
            match self.prompt("Enter choice: ")? {
                Some(again) if again == "1" => continue,
                Some(_) => return Ok(Flow::Continue),
                None => return Ok(Flow::EndOfInput),
            }
        }
    }

    fn search(&mut self) -> SpentSmartResult<Flow> {
        writeln!(self.output, "\n1. Search by date\n2. Search by item")?;
        let Some(choice) = self.prompt("Enter choice: ")? else {
            return Ok(Flow::EndOfInput);
        };

        match choice.as_str() {
            "1" => {
                let Some(text) = self.prompt("Enter date (YYYY-MM-DD): ")? else {
                    return Ok(Flow::EndOfInput);
                };
                let day = parse_date(&text).map_err(|_| {
                    SpentSmartError::Validation(format!(
                        "Invalid date '{}': expected YYYY-MM-DD",
                        text
                    ))
                })?;

                let results = QueryService::new(&self.ledger).by_date(day);
                let table = display::format_expense_table(results, self.symbol());
                match table {
                    Some(table) => writeln!(self.output, "\nSearch Results by Date:\n{}", table)?,
                    None => writeln!(self.output, "No expenses found for the given date.")?,
                }
            }
            "2" => {
                let Some(item) = self.prompt("Enter item name: ")? else {
                    return Ok(Flow::EndOfInput);
                };

                let results = QueryService::new(&self.ledger).by_item_name(&item);
                let table = display::format_expense_table(results, self.symbol());
                match table {
                    Some(table) => writeln!(self.output, "\nSearch Results by Item:\n{}", table)?,
                    None => writeln!(self.output, "No expenses found for the given item.")?,
                }
            }
            _ => writeln!(self.output, "Invalid choice.")?,
        }

        Ok(Flow::Continue)
    }

    fn budget(&mut self) -> SpentSmartResult<Flow> {
        writeln!(self.output, "\n1. Set budget\n2. Track budget")?;
        let Some(choice) = self.prompt("Enter choice: ")? else {
            return Ok(Flow::EndOfInput);
        };

        match choice.as_str() {
            "1" => {
                let Some(amount) = self.prompt_amount("Enter budget amount: ")? else {
                    return Ok(Flow::EndOfInput);
                };
                let before = self.ledger.budget_ceiling();
                self.ledger.set_budget(amount)?;
                self.storage.log_budget(before, amount)?;
                let shown = amount.format_with_symbol(self.symbol());
                writeln!(self.output, "Budget set to {}", shown)?;
            }
            "2" => {
                let status = BudgetService::new(&self.ledger).status();
                let line = display::format_budget_status(&status, self.symbol());
                writeln!(self.output, "{}", line)?;
            }
            _ => writeln!(self.output, "Invalid choice.")?,
        }

        Ok(Flow::Continue)
    }

    fn add_to_savings(&mut self) -> SpentSmartResult<Flow> {
        let Some(amount) = self.prompt_amount("Enter amount to add to savings: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let before = self.ledger.savings_total();
        let total = self.ledger.add_to_savings(amount)?;
        self.storage.log_savings(before, total)?;

        let message = format!(
            "Added {} to savings. Total savings: {}",
            amount.format_with_symbol(self.symbol()),
            total.format_with_symbol(self.symbol())
        );
        writeln!(self.output, "{}", message)?;
        Ok(Flow::Continue)
    }

    fn account_statement(&mut self) -> SpentSmartResult<Flow> {
        let symbol = self.settings.currency_symbol.as_str();
        let query = QueryService::new(&self.ledger);

        let details = display::format_expense_table(self.ledger.snapshot(), symbol)
            .unwrap_or_else(|| "No expenses recorded.".to_string());
        let totals = display::format_category_totals(&query.category_totals(), symbol);
        let grand_total = display::format_grand_total(query.grand_total(), symbol);
        let statement = display::format_account_statement(&query.account_statement(), symbol);

        writeln!(
            self.output,
            "\nExpense Details:\n{}\n\nCategory Totals:\n{}\n\nGrand Total:\n{}\n\nAccount Statement:\n{}",
            details, totals, grand_total, statement
        )?;
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> SpentSmartResult<Flow> {
        self.storage.save_ledger(&self.ledger)?;
        writeln!(
            self.output,
            "Expenses saved to {}",
            self.storage.expenses.path().display()
        )?;
        Ok(Flow::Exit)
    }

    fn reset(&mut self) -> SpentSmartResult<Flow> {
        self.storage.log_reset(&self.ledger)?;
        self.ledger.reset_all();
        writeln!(
            self.output,
            "All expenses, budget and savings have been reset."
        )?;
        Ok(Flow::Continue)
    }

    fn export_csv(&mut self) -> SpentSmartResult<Flow> {
        let path = self.storage.paths().export_dir().join("expenses.csv");
        export_ledger(self.storage, &self.ledger, ExportFormat::Csv, &path)?;
        writeln!(self.output, "Expenses exported to {}", path.display())?;
        Ok(Flow::Continue)
    }
}
