//! User settings for PocketGuard
//!
//! Holds display preferences and the two user-configured scalars the
//! dashboard computations take as input: the spending budget limit and the
//! initial balance. The settings record is loaded explicitly and passed to
//! the reports; nothing in `reports` reads it from disk.

use serde::{Deserialize, Serialize};

use super::paths::PocketGuardPaths;
use crate::error::PocketGuardError;
use crate::models::{BalanceState, BudgetState, Money};
use crate::storage::file_io::write_json_atomic;

/// User settings for PocketGuard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Spending ceiling; zero means no budget is configured
    #[serde(default)]
    pub budget_limit: Money,

    /// Starting funds the current balance is projected from
    #[serde(default)]
    pub initial_balance: Money,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            budget_limit: Money::zero(),
            initial_balance: Money::zero(),
        }
    }
}

impl Settings {
    /// The budget limit as the state record consumed by budget progress
    pub fn budget_state(&self) -> BudgetState {
        BudgetState::new(self.budget_limit)
    }

    /// The initial balance as the state record consumed by the balance projector
    pub fn balance_state(&self) -> BalanceState {
        BalanceState::new(self.initial_balance)
    }

    /// Load settings from disk, or create default settings if the file doesn't exist
    pub fn load_or_create(paths: &PocketGuardPaths) -> Result<Self, PocketGuardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PocketGuardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PocketGuardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not persisted until the caller saves
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketGuardPaths) -> Result<(), PocketGuardError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
