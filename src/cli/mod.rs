//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod audit;
pub mod expense;
pub mod export;
pub mod milestone;
pub mod report;
pub mod settings;

pub use audit::handle_audit_command;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use milestone::{handle_milestone_command, MilestoneCommands};
pub use report::{handle_report_command, ReportCommands};
pub use settings::{handle_balance_command, handle_budget_command, BalanceCommands, BudgetCommands};
