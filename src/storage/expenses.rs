//! Expense repository
//!
//! Keeps expenses in memory behind an `RwLock` and persists them to
//! `data/expenses.json`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::PocketGuardError;
use crate::models::{Expense, ExpenseId, Transaction};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Default, Serialize, Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
}

/// Newest date first, then newest entry first within a day
fn sort_newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Replace the in-memory set with the file contents
    pub fn load(&self) -> Result<(), PocketGuardError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| PocketGuardError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        data.extend(file_data.expenses.into_iter().map(|e| (e.id, e)));
        Ok(())
    }

    pub fn save(&self) -> Result<(), PocketGuardError> {
        let expenses = self.get_all()?;
        write_json_atomic(&self.path, &ExpenseData { expenses })
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, PocketGuardError> {
        let data = self
            .data
            .read()
            .map_err(|e| PocketGuardError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.get(&id).cloned())
    }

    /// All expenses, newest first
    pub fn get_all(&self) -> Result<Vec<Expense>, PocketGuardError> {
        let data = self
            .data
            .read()
            .map_err(|e| PocketGuardError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut expenses);
        Ok(expenses)
    }

    /// Expenses whose ID matches a user-supplied identifier
    pub fn find_matching(&self, identifier: &str) -> Result<Vec<Expense>, PocketGuardError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| e.id.matches(identifier))
            .collect())
    }

    /// Read-only snapshots for the reports, newest first
    pub fn transactions(&self) -> Result<Vec<Transaction>, PocketGuardError> {
        Ok(self.get_all()?.iter().map(Expense::to_transaction).collect())
    }

    pub fn upsert(&self, expense: Expense) -> Result<(), PocketGuardError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PocketGuardError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.insert(expense.id, expense);
        Ok(())
    }

    /// Remove an expense, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, PocketGuardError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PocketGuardError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(data.remove(&id))
    }

    pub fn count(&self) -> Result<usize, PocketGuardError> {
        let data = self
            .data
            .read()
            .map_err(|e| PocketGuardError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
