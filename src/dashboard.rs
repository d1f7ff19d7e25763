//! Dashboard store
//!
//! Holds the latest [`DashboardSummary`] for a transaction source and
//! recomputes it when a change event arrives. Refreshes always refetch the
//! full snapshot and recompute from scratch, so the last refresh wins.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};

use tracing::debug;

use crate::config::Settings;
use crate::error::PocketGuardResult;
use crate::events::ChangeEvent;
use crate::feed::load_feed;
use crate::models::{BalanceState, BudgetState, Transaction};
use crate::reports::{CategoryBreakdown, CategoryVisibility, DashboardSummary};
use crate::storage::Storage;

/// Where the dashboard reads transactions and configured scalars from
pub trait TransactionSource {
    fn transactions(&self) -> PocketGuardResult<Vec<Transaction>>;
    fn budget(&self) -> PocketGuardResult<BudgetState>;
    fn balance(&self) -> PocketGuardResult<BalanceState>;
}

/// Expenses from local storage, scalars from the settings file
pub struct LocalSource<'a> {
    storage: &'a Storage,
}

impl<'a> LocalSource<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    fn settings(&self) -> PocketGuardResult<Settings> {
        Settings::load_or_create(self.storage.paths())
    }
}

impl TransactionSource for LocalSource<'_> {
    fn transactions(&self) -> PocketGuardResult<Vec<Transaction>> {
        self.storage.expenses.transactions()
    }

    fn budget(&self) -> PocketGuardResult<BudgetState> {
        Ok(self.settings()?.budget_state())
    }

    fn balance(&self) -> PocketGuardResult<BalanceState> {
        Ok(self.settings()?.balance_state())
    }
}

/// Transactions from a feed file, with fixed scalars
pub struct FeedSource {
    path: PathBuf,
    budget: BudgetState,
    balance: BalanceState,
}

impl FeedSource {
    pub fn new(path: impl Into<PathBuf>, budget: BudgetState, balance: BalanceState) -> Self {
        Self {
            path: path.into(),
            budget,
            balance,
        }
    }
}

impl TransactionSource for FeedSource {
    fn transactions(&self) -> PocketGuardResult<Vec<Transaction>> {
        load_feed(&self.path)
    }

    fn budget(&self) -> PocketGuardResult<BudgetState> {
        Ok(self.budget)
    }

    fn balance(&self) -> PocketGuardResult<BalanceState> {
        Ok(self.balance)
    }
}

pub struct DashboardStore<S> {
    source: S,
    changes: Option<Receiver<ChangeEvent>>,
    summary: DashboardSummary,
    visibility: CategoryVisibility,
    refreshes: usize,
}

impl<S: TransactionSource> DashboardStore<S> {
    /// Build the store and compute the first summary
    ///
    /// Without a change receiver the store only updates on [`refresh`].
    ///
    /// [`refresh`]: DashboardStore::refresh
    pub fn new(source: S, changes: Option<Receiver<ChangeEvent>>) -> PocketGuardResult<Self> {
        let summary = compute(&source)?;
        Ok(Self {
            source,
            changes,
            summary,
            visibility: CategoryVisibility::new(),
            refreshes: 1,
        })
    }

    /// Refetch and recompute unconditionally
    pub fn refresh(&mut self) -> PocketGuardResult<&DashboardSummary> {
        self.summary = compute(&self.source)?;
        self.refreshes += 1;
        debug!(
            refreshes = self.refreshes,
            transactions = self.summary.transaction_count,
            "dashboard refreshed"
        );
        Ok(&self.summary)
    }

    /// Drain pending change events and refresh once if any affect the summary
    ///
    /// Returns whether a refresh happened.
    pub fn refresh_if_changed(&mut self) -> PocketGuardResult<bool> {
        let Some(changes) = &self.changes else {
            return Ok(false);
        };

        let mut stale = false;
        let disconnected = loop {
            match changes.try_recv() {
                Ok(event) => stale |= event.affects_dashboard(),
                Err(TryRecvError::Empty) => break false,
                Err(TryRecvError::Disconnected) => break true,
            }
        };

        if disconnected {
            self.changes = None;
        }
        if stale {
            self.refresh()?;
        }
        Ok(stale)
    }

    pub fn summary(&self) -> &DashboardSummary {
        &self.summary
    }

    pub fn visibility(&self) -> &CategoryVisibility {
        &self.visibility
    }

    /// Hide or show a category in the chart; returns `true` if now hidden
    pub fn toggle_category(&mut self, category: &str) -> bool {
        self.visibility.toggle(category)
    }

    pub fn hide_categories<I, T>(&mut self, categories: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for category in categories {
            self.visibility.hide(category.as_ref());
        }
    }

    /// The category breakdown restricted to visible categories
    pub fn chart_view(&self) -> CategoryBreakdown {
        self.summary.categories.visible(&self.visibility)
    }

    /// Number of summaries computed, including the initial one
    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }
}

impl<'a> DashboardStore<LocalSource<'a>> {
    /// A store over local storage that follows its change notifier
    pub fn local(storage: &'a Storage) -> PocketGuardResult<Self> {
        let changes = storage.notifier().subscribe();
        Self::new(LocalSource::new(storage), Some(changes))
    }
}

fn compute<S: TransactionSource>(source: &S) -> PocketGuardResult<DashboardSummary> {
    let transactions = source.transactions()?;
    Ok(DashboardSummary::compute(
        &transactions,
        source.budget()?,
        source.balance()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PocketGuardPaths;
    use crate::models::Money;
    use crate::services::{ExpenseService, MilestoneService, SettingsService};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketGuardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    #[test]
    fn test_expense_write_triggers_refresh() {
        let (_temp, storage) = create_test_storage();
        let mut store = DashboardStore::local(&storage).unwrap();
        assert_eq!(store.summary().transaction_count, 0);
        assert!(!store.refresh_if_changed().unwrap());

        let expenses = ExpenseService::new(&storage);
        expenses.create("Lunch", Money::from_cents(10_000), "Food", date(1, 15)).unwrap();
        expenses.create("Metro", Money::from_cents(5_000), "Transport", date(1, 20)).unwrap();

        assert!(store.refresh_if_changed().unwrap());
        assert_eq!(store.refresh_count(), 2);
        assert_eq!(store.summary().transaction_count, 2);
        assert_eq!(store.summary().total_spent, Money::from_cents(15_000));
        assert!(!store.refresh_if_changed().unwrap());
    }

    #[test]
    fn test_settings_change_reaches_dashboard() {
        let (_temp, storage) = create_test_storage();
        ExpenseService::new(&storage)
            .create("Rent", Money::from_cents(50_000), "Housing", date(2, 1))
            .unwrap();

        let mut store = DashboardStore::local(&storage).unwrap();
        assert!(!store.summary().budget.configured);

        let mut settings = SettingsService::load(&storage).unwrap();
        settings.set_budget_limit(Money::from_cents(100_000)).unwrap();
        settings.set_initial_balance(Money::from_cents(200_000)).unwrap();

        assert!(store.refresh_if_changed().unwrap());
        let summary = store.summary();
        assert_eq!(summary.budget.percentage, 50.0);
        assert_eq!(summary.balance.current, Money::from_cents(150_000));
    }

    #[test]
    fn test_milestone_changes_do_not_refresh() {
        let (_temp, storage) = create_test_storage();
        let mut store = DashboardStore::local(&storage).unwrap();

        MilestoneService::new(&storage).create("Save", "Cake").unwrap();

        assert!(!store.refresh_if_changed().unwrap());
        assert_eq!(store.refresh_count(), 1);
    }

    #[test]
    fn test_chart_view_respects_visibility() {
        let (_temp, storage) = create_test_storage();
        let expenses = ExpenseService::new(&storage);
        expenses.create("Lunch", Money::from_cents(15_000), "Food", date(1, 2)).unwrap();
        expenses.create("Bus", Money::from_cents(5_000), "Transport", date(1, 3)).unwrap();

        let mut store = DashboardStore::local(&storage).unwrap();
        assert!(store.toggle_category("Transport"));

        let chart = store.chart_view();
        assert_eq!(chart.len(), 1);
        assert_eq!(chart.categories()[0].percentage, 100.0);
        assert_eq!(store.summary().categories.len(), 2);

        assert!(!store.toggle_category("Transport"));
        assert_eq!(store.chart_view().len(), 2);
    }

    #[test]
    fn test_feed_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("feed.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "description": "Lunch", "amount": 100, "category": "Food", "date": "2025-01-15"},
                {"id": 2, "description": "Metro", "amount": 50, "category": "Transport", "date": "2025-03-02T10:00:00Z"}
            ]"#,
        )
        .unwrap();

        let source = FeedSource::new(
            &path,
            BudgetState::new(Money::from_cents(20_000)),
            BalanceState::default(),
        );
        let mut store = DashboardStore::new(source, None).unwrap();
        assert_eq!(store.summary().monthly.labels(), vec!["Jan 2025", "Mar 2025"]);
        assert_eq!(store.summary().budget.percentage, 75.0);

        std::fs::write(&path, "not json").unwrap();
        assert!(!store.refresh_if_changed().unwrap());
        store.refresh().unwrap();
        assert_eq!(store.summary().transaction_count, 0);
    }
}
