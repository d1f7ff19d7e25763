//! Monthly spending totals
//!
//! Groups transactions by calendar month. Months are listed in the order they
//! are first encountered in the input, not in calendar order; sort the result
//! with [`MonthlySpending::chronological`] when calendar order is wanted.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Money, Transaction};

/// Label for the month a date falls in, e.g. "Jan 2025"
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Spending for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub amount: Money,
    pub transaction_count: usize,
}

/// Spending grouped by month
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MonthlySpending {
    months: Vec<MonthlyTotal>,
}

impl MonthlySpending {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut index: HashMap<(i32, u32), usize> = HashMap::new();
        let mut months: Vec<MonthlyTotal> = Vec::new();

        for txn in transactions {
            let key = (txn.date.year(), txn.date.month());
            let slot = *index.entry(key).or_insert_with(|| {
                months.push(MonthlyTotal {
                    label: month_label(txn.date),
                    year: key.0,
                    month: key.1,
                    amount: Money::zero(),
                    transaction_count: 0,
                });
                months.len() - 1
            });

            months[slot].amount += txn.amount;
            months[slot].transaction_count += 1;
        }

        Self { months }
    }

    /// Months in first-seen order
    pub fn months(&self) -> &[MonthlyTotal] {
        &self.months
    }

    pub fn labels(&self) -> Vec<&str> {
        self.months.iter().map(|m| m.label.as_str()).collect()
    }

    pub fn get(&self, label: &str) -> Option<&MonthlyTotal> {
        self.months.iter().find(|m| m.label == label)
    }

    pub fn total(&self) -> Money {
        self.months.iter().map(|m| m.amount).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// A copy sorted oldest month first
    pub fn chronological(&self) -> MonthlySpending {
        let mut months = self.months.clone();
        months.sort_by_key(|m| (m.year, m.month));
        Self { months }
    }
}
