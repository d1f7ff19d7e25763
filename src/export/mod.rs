//! Data export
//!
//! - CSV: expenses, spreadsheet-compatible
//! - JSON: full export, machine-readable
//! - YAML: full export, human-readable
//!
//! The category report CSV lives with the reports in
//! [`crate::reports::export_categories_csv`].

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
