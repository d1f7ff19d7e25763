//! Full data export as JSON

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::{PocketGuardError, PocketGuardResult};
use crate::models::{Expense, Milestone};
use crate::storage::Storage;

pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything PocketGuard stores, in one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub settings: Settings,
    pub expenses: Vec<Expense>,
    pub milestones: Vec<Milestone>,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub milestone_count: usize,
    pub category_count: usize,
    pub earliest_expense: Option<String>,
    pub latest_expense: Option<String>,
}

impl FullExport {
    pub fn from_storage(storage: &Storage) -> PocketGuardResult<Self> {
        let settings = Settings::load_or_create(storage.paths())?;
        let expenses = storage.expenses.get_all()?;
        let milestones = storage.milestones.get_all()?;

        let categories: HashSet<&str> = expenses.iter().map(|e| e.category.as_str()).collect();
        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            milestone_count: milestones.len(),
            category_count: categories.len(),
            earliest_expense: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_expense: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            settings,
            expenses,
            milestones,
            metadata,
        })
    }

    /// Check the schema version and that the metadata matches the contents
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }
        if self.metadata.expense_count != self.expenses.len() {
            return Err(format!(
                "Expense count mismatch: metadata says {}, found {}",
                self.metadata.expense_count,
                self.expenses.len()
            ));
        }
        if self.metadata.milestone_count != self.milestones.len() {
            return Err(format!(
                "Milestone count mismatch: metadata says {}, found {}",
                self.metadata.milestone_count,
                self.milestones.len()
            ));
        }
        if let Some(expense) = self.expenses.iter().find(|e| e.validate().is_err()) {
            return Err(format!("Invalid expense in export: {}", expense.id));
        }
        Ok(())
    }
}

pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> PocketGuardResult<()> {
    let export = FullExport::from_storage(storage)?;

    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    result.map_err(|e| PocketGuardError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| PocketGuardError::Export(e.to_string()))
}

/// Parse and validate a JSON export
pub fn import_from_json(json: &str) -> PocketGuardResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json).map_err(|e| PocketGuardError::Export(e.to_string()))?;
    export.validate().map_err(PocketGuardError::Export)?;
    Ok(export)
}
