//! Reports module for PocketGuard
//!
//! Pure aggregation over a transaction snapshot: category breakdowns with a
//! chart visibility filter, budget progress, balance projection and monthly
//! totals. Nothing here performs I/O or returns errors; zero totals, budgets
//! and balances all resolve to zero percentages.

pub mod balance;
pub mod budget;
pub mod category;
pub mod monthly;
pub mod severity;
pub mod summary;

pub use balance::{balance_ratio, current_balance, BalanceProjection};
pub use budget::{percentage_of_budget, BudgetProgress};
pub use category::{CategoryBreakdown, CategoryTotal, CategoryVisibility};
pub use monthly::{month_label, MonthlySpending, MonthlyTotal};
pub use severity::SeverityTier;
pub use summary::{export_categories_csv, progress_bar, DashboardSummary};
