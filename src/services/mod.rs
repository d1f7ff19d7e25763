//! Service layer for PocketGuard
//!
//! Services validate input, write through the repositories, append to the
//! audit log and publish a change event for each successful mutation.

pub mod expense;
pub mod milestone;
pub mod settings;

pub use expense::ExpenseService;
pub use milestone::{MilestoneService, MilestoneUpdate};
pub use settings::SettingsService;
