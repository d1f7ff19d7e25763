//! Expense table formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Render expenses as a table, in the order given
pub fn format_expense_list(expenses: &[Expense], symbol: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: e.date.format(date_format).to_string(),
        name: e.name.clone(),
        category: e.category.clone(),
        amount: e.amount.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));
    format!("{}\n", table)
}

pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    format!(
        "Expense:  {}\nName:     {}\nAmount:   {}\nCategory: {}\nDate:     {}\n",
        expense.id,
        expense.name,
        expense.amount.format_with_symbol(symbol),
        expense.category,
        expense.date.format("%Y-%m-%d"),
    )
}
