//! Terminal output formatting

pub mod expense;
pub mod milestone;
pub mod report;

pub use expense::{format_expense_details, format_expense_list};
pub use milestone::format_milestone_list;
pub use report::{format_category_table, format_monthly_table};
