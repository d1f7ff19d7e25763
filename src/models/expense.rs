//! Expense model
//!
//! An expense is the stored record behind a transaction snapshot. The store
//! calls the label `name`; snapshots call it `description`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;
use super::transaction::Transaction;

/// A persisted expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    /// Label entered by the user (letters and spaces only)
    pub name: String,

    pub amount: Money,

    pub category: String,

    pub date: NaiveDate,

    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            category: category.into(),
            date,
            created_at: Utc::now(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if !name.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()) {
            return Err(ExpenseValidationError::InvalidName(self.name.clone()));
        }
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }
        Ok(())
    }

    /// The read-only snapshot consumed by the reports
    pub fn to_transaction(&self) -> Transaction {
        Transaction::new(
            self.id.to_string(),
            self.name.clone(),
            self.amount,
            self.category.clone(),
            self.date,
        )
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({}) {}", self.date, self.name, self.category, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    InvalidName(String),
    NegativeAmount(Money),
    EmptyCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::InvalidName(name) => {
                write!(f, "Expense name must contain only letters: {}", name)
            }
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative: {}", amount)
            }
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
