//! Configuration module for PocketGuard
//!
//! - Path resolution for the config and data directories
//! - User settings persistence, including the budget limit and initial balance

pub mod paths;
pub mod settings;

pub use paths::PocketGuardPaths;
pub use settings::Settings;
