//! Core data models for PocketGuard
//!
//! Stored records (expenses, milestones), the transaction snapshot the
//! reports read, money, and the configured budget/balance scalars.

pub mod budget;
pub mod expense;
pub mod ids;
pub mod milestone;
pub mod money;
pub mod transaction;

pub use budget::{BalanceState, BudgetState};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::{ExpenseId, MilestoneId};
pub use milestone::{Milestone, MilestoneValidationError};
pub use money::{Money, MoneyParseError, MAX_AMOUNT_CENTS};
pub use transaction::{parse_iso_date, Transaction};
