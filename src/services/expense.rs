//! Expense service
//!
//! Validation, persistence, auditing and change notification for expenses.

use chrono::NaiveDate;
use tracing::info;

use crate::audit::EntityType;
use crate::error::{PocketGuardError, PocketGuardResult};
use crate::events::ChangeEvent;
use crate::models::{Expense, Money, Transaction};
use crate::storage::Storage;

pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    pub fn create(
        &self,
        name: &str,
        amount: Money,
        category: &str,
        date: NaiveDate,
    ) -> PocketGuardResult<Expense> {
        let expense = Expense::new(name.trim(), amount, category.trim(), date);
        expense
            .validate()
            .map_err(|e| PocketGuardError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.name.clone()),
            &expense,
        )?;
        self.storage.publish(ChangeEvent::Expenses);

        info!(id = %expense.id, category = %expense.category, amount = %expense.amount, "expense recorded");
        Ok(expense)
    }

    /// All expenses, newest first
    pub fn list(&self) -> PocketGuardResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// The snapshot the dashboard reports are computed from
    pub fn transactions(&self) -> PocketGuardResult<Vec<Transaction>> {
        self.storage.expenses.transactions()
    }

    /// Resolve an identifier (full UUID, short ID or UUID prefix) to one expense
    pub fn find(&self, identifier: &str) -> PocketGuardResult<Expense> {
        let mut matches = self.storage.expenses.find_matching(identifier)?;
        match matches.len() {
            0 => Err(PocketGuardError::expense_not_found(identifier)),
            1 => Ok(matches.remove(0)),
            _ => Err(PocketGuardError::Ambiguous {
                entity_type: "Expense",
                identifier: identifier.to_string(),
            }),
        }
    }

    pub fn delete(&self, identifier: &str) -> PocketGuardResult<Expense> {
        let expense = self.find(identifier)?;

        self.storage.expenses.delete(expense.id)?;
        self.storage.expenses.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.name.clone()),
            &expense,
        )?;
        self.storage.publish(ChangeEvent::Expenses);

        info!(id = %expense.id, "expense deleted");
        Ok(expense)
    }

    pub fn count(&self) -> PocketGuardResult<usize> {
        self.storage.expenses.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::PocketGuardPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketGuardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_create_persists_and_audits() {
        let (_temp, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service
            .create("  Lunch ", Money::from_cents(25_050), "Food", date(15))
            .unwrap();
        assert_eq!(expense.name, "Lunch");

        storage.expenses.load().unwrap();
        assert_eq!(service.count().unwrap(), 1);

        let log = storage.audit().read_all().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].operation, Operation::Create);
        assert_eq!(log[0].entity_name.as_deref(), Some("Lunch"));
    }

    #[test]
    fn test_create_rejects_invalid_input() {
        let (_temp, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let bad_name = service.create("Taxi 42", Money::from_cents(100), "Transport", date(1));
        assert!(bad_name.unwrap_err().is_validation());

        let negative = service.create("Refund", Money::from_cents(-1), "Food", date(1));
        assert!(negative.unwrap_err().is_validation());

        let blank_category = service.create("Snacks", Money::from_cents(100), "  ", date(1));
        assert!(blank_category.unwrap_err().is_validation());

        assert_eq!(service.count().unwrap(), 0);
        assert!(storage.audit().read_all().unwrap().is_empty());
    }

    #[test]
    fn test_zero_amount_is_allowed() {
        let (_temp, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        assert!(service.create("Free sample", Money::zero(), "Food", date(2)).is_ok());
    }

    #[test]
    fn test_writes_publish_change_events() {
        let (_temp, storage) = create_test_storage();
        let changes = storage.notifier().subscribe();
        let service = ExpenseService::new(&storage);

        let expense = service.create("Tea", Money::from_cents(50), "Food", date(3)).unwrap();
        service.delete(&expense.id.to_string()).unwrap();

        assert_eq!(changes.try_recv(), Ok(ChangeEvent::Expenses));
        assert_eq!(changes.try_recv(), Ok(ChangeEvent::Expenses));
        assert!(changes.try_recv().is_err());
    }

    #[test]
    fn test_find_and_delete() {
        let (_temp, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service.create("Bus", Money::from_cents(300), "Transport", date(4)).unwrap();
        let found = service.find(&expense.id.to_string()).unwrap();
        assert_eq!(found.id, expense.id);

        let deleted = service.delete(&expense.id.as_uuid().to_string()).unwrap();
        assert_eq!(deleted.name, "Bus");
        assert!(service.find(&expense.id.to_string()).unwrap_err().is_not_found());

        let log = storage.audit().read_all().unwrap();
        assert_eq!(log.last().unwrap().operation, Operation::Delete);
    }

    #[test]
    fn test_list_newest_first() {
        let (_temp, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.create("Old", Money::from_cents(100), "Food", date(1)).unwrap();
        service.create("New", Money::from_cents(100), "Food", date(9)).unwrap();

        let names: Vec<_> = service.list().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["New", "Old"]);
        assert_eq!(service.transactions().unwrap()[0].description, "New");
    }
}
