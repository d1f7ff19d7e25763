//! Expense export as CSV

use std::io::Write;

use serde::Serialize;

use crate::error::{PocketGuardError, PocketGuardResult};
use crate::storage::Storage;

#[derive(Serialize)]
struct ExpenseCsvRow<'a> {
    id: String,
    date: String,
    name: &'a str,
    category: &'a str,
    amount: String,
}

/// Write every expense, newest first
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: W) -> PocketGuardResult<usize> {
    let expenses = storage.expenses.get_all()?;
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    for expense in &expenses {
        csv_writer
            .serialize(ExpenseCsvRow {
                id: expense.id.as_uuid().to_string(),
                date: expense.date.to_string(),
                name: &expense.name,
                category: &expense.category,
                amount: expense.amount.to_string(),
            })
            .map_err(|e| PocketGuardError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PocketGuardError::Export(e.to_string()))?;
    Ok(expenses.len())
}
