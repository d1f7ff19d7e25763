//! CLI commands for expenses

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{PocketGuardError, PocketGuardResult};
use crate::models::{parse_iso_date, Money};
use crate::services::ExpenseService;
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// What the money was spent on (letters and spaces)
        name: String,
        /// Amount, e.g. 250.50
        amount: String,
        /// Spending category
        #[arg(short, long)]
        category: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
        /// Show at most this many
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete an expense by ID
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (short form or prefix)
        id: String,
    },
}

pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> PocketGuardResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(text) => parse_date(&text)?,
                None => Local::now().date_naive(),
            };

            let expense = service.create(&name, amount, &category, date)?;
            println!("Recorded expense {}", expense.id);
            print!("{}", format_expense_details(&expense, symbol));
        }
        ExpenseCommands::List { category, limit } => {
            let mut expenses = service.list()?;
            if let Some(category) = category {
                expenses.retain(|e| e.category.eq_ignore_ascii_case(&category));
            }
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }
            print!("{}", format_expense_list(&expenses, symbol, &settings.date_format));
        }
        ExpenseCommands::Delete { id } => {
            let expense = service.delete(&id)?;
            println!(
                "Deleted expense {} ({}, {})",
                expense.id,
                expense.name,
                expense.amount.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

pub(crate) fn parse_amount(text: &str) -> PocketGuardResult<Money> {
    Money::parse(text).map_err(|e| PocketGuardError::Validation(e.to_string()))
}

fn parse_date(text: &str) -> PocketGuardResult<NaiveDate> {
    parse_iso_date(text)
        .ok_or_else(|| PocketGuardError::Validation(format!("Invalid date: {} (use YYYY-MM-DD)", text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("250.50").unwrap(), Money::from_cents(25_050));
        assert!(parse_amount("-3").unwrap_err().is_validation());
        assert!(parse_amount("abc").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
        assert!(parse_date("15/01/2025").unwrap_err().is_validation());
    }
}
