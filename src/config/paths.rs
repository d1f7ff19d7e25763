//! Path management for PocketGuard
//!
//! ## Path Resolution Order
//!
//! 1. `POCKETGUARD_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/pocketguard` on Linux, `%APPDATA%\pocketguard` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PocketGuardError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "POCKETGUARD_DATA_DIR";

/// Manages all paths used by PocketGuard
#[derive(Debug, Clone)]
pub struct PocketGuardPaths {
    base_dir: PathBuf,
}

impl PocketGuardPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PocketGuardError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the data files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Path to milestones.json
    pub fn milestones_file(&self) -> PathBuf {
        self.data_dir().join("milestones.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), PocketGuardError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            PocketGuardError::Io(format!("Failed to create base directory: {}", e))
        })?;

        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            PocketGuardError::Io(format!("Failed to create data directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if PocketGuard has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PocketGuardError> {
    ProjectDirs::from("", "", "pocketguard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PocketGuardError::Config("Could not determine a home directory".into()))
}
