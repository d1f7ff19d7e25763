//! Settings service
//!
//! Owns the loaded [`Settings`] record. The budget limit and initial balance
//! are read from here and passed into the reports as plain values.

use tracing::info;

use crate::audit::EntityType;
use crate::config::Settings;
use crate::error::{PocketGuardError, PocketGuardResult};
use crate::events::ChangeEvent;
use crate::models::{BalanceState, BudgetState, Money};
use crate::storage::Storage;

const SETTINGS_ENTITY_ID: &str = "settings";

pub struct SettingsService<'a> {
    storage: &'a Storage,
    settings: Settings,
}

impl<'a> SettingsService<'a> {
    /// Load settings from the storage's config file
    pub fn load(storage: &'a Storage) -> PocketGuardResult<Self> {
        let settings = Settings::load_or_create(storage.paths())?;
        Ok(Self { storage, settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn budget_state(&self) -> BudgetState {
        self.settings.budget_state()
    }

    pub fn balance_state(&self) -> BalanceState {
        self.settings.balance_state()
    }

    /// Set the spending ceiling; zero clears it
    pub fn set_budget_limit(&mut self, limit: Money) -> PocketGuardResult<&Settings> {
        if limit.is_negative() {
            return Err(PocketGuardError::Validation(format!(
                "Budget limit cannot be negative: {}",
                limit
            )));
        }
        self.apply(|s| s.budget_limit = limit)?;
        info!(limit = %limit, "budget limit set");
        Ok(&self.settings)
    }

    /// Set the balance the current balance is projected from; zero clears it
    pub fn set_initial_balance(&mut self, initial: Money) -> PocketGuardResult<&Settings> {
        if initial.is_negative() {
            return Err(PocketGuardError::Validation(format!(
                "Initial balance cannot be negative: {}",
                initial
            )));
        }
        self.apply(|s| s.initial_balance = initial)?;
        info!(initial = %initial, "initial balance set");
        Ok(&self.settings)
    }

    fn apply(&mut self, change: impl FnOnce(&mut Settings)) -> PocketGuardResult<()> {
        let before = self.settings.clone();
        let mut after = before.clone();
        change(&mut after);
        if after == before {
            return Ok(());
        }

        after.save(self.storage.paths())?;
        self.storage.log_update(
            EntityType::Settings,
            SETTINGS_ENTITY_ID,
            None,
            &before,
            &after,
        )?;
        self.settings = after;
        self.storage.publish(ChangeEvent::Settings);
        Ok(())
    }
}
