//! First-run setup

use crate::config::{PocketGuardPaths, Settings};
use crate::error::PocketGuardError;

use super::file_io::write_json_atomic;

/// Create the directory layout, empty data files and default settings
///
/// Existing files are left untouched. Returns `true` if the settings file
/// was created by this call.
pub fn initialize_storage(paths: &PocketGuardPaths) -> Result<bool, PocketGuardError> {
    paths.ensure_directories()?;

    if !paths.expenses_file().exists() {
        write_json_atomic(paths.expenses_file(), &serde_json::json!({ "expenses": [] }))?;
    }
    if !paths.milestones_file().exists() {
        write_json_atomic(paths.milestones_file(), &serde_json::json!({ "milestones": [] }))?;
    }

    if paths.is_initialized() {
        return Ok(false);
    }
    Settings::default().save(paths)?;
    Ok(true)
}
