//! PocketGuard - personal expense tracking with a spending dashboard
//!
//! The library records expenses and savings milestones, and derives the
//! dashboard figures from a transaction snapshot: spending per category,
//! progress against a budget limit, the balance left from an initial amount,
//! and spending per month.
//!
//! # Architecture
//!
//! - `config`: paths and the settings record (budget limit, initial balance)
//! - `error`: error types
//! - `models`: expenses, milestones, transaction snapshots, money
//! - `storage`: JSON file repositories
//! - `audit`: append-only audit log
//! - `events`: change notification between writers and the dashboard
//! - `services`: validation and mutation on top of storage
//! - `feed`: parsing the transaction feed served by the PocketGuard API
//! - `reports`: pure aggregation over a transaction snapshot
//! - `dashboard`: keeps a summary current as changes arrive
//! - `display`, `export`, `cli`: output surfaces
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketguard::models::{BalanceState, BudgetState, Money};
//! use pocketguard::reports::DashboardSummary;
//!
//! let summary = DashboardSummary::compute(
//!     &transactions,
//!     BudgetState::new(Money::from_cents(500_000)),
//!     BalanceState::new(Money::from_cents(1_000_000)),
//! );
//! println!("{}", summary.format_terminal("₹"));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod events;
pub mod export;
pub mod feed;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PocketGuardError, PocketGuardResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Default filter when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "pocketguard=warn";

/// Install the global tracing subscriber, writing to stderr
///
/// Honours `RUST_LOG`. Safe to call more than once.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
