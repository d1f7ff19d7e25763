//! Storage layer for PocketGuard
//!
//! JSON file repositories with atomic writes, plus the audit logger and the
//! change notifier every write goes through.

pub mod expenses;
pub mod file_io;
pub mod init;
pub mod milestones;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use milestones::MilestoneRepository;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::PocketGuardPaths;
use crate::error::PocketGuardError;
use crate::events::{ChangeEvent, ChangeNotifier};

/// Owns the repositories, the audit log and the change notifier
pub struct Storage {
    paths: PocketGuardPaths,
    pub expenses: ExpenseRepository,
    pub milestones: MilestoneRepository,
    audit: AuditLogger,
    notifier: ChangeNotifier,
}

impl Storage {
    pub fn new(paths: PocketGuardPaths) -> Result<Self, PocketGuardError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            milestones: MilestoneRepository::new(paths.milestones_file()),
            audit: AuditLogger::new(paths.audit_log()),
            notifier: ChangeNotifier::new(),
            paths,
        })
    }

    pub fn paths(&self) -> &PocketGuardPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    pub fn load_all(&self) -> Result<(), PocketGuardError> {
        self.expenses.load()?;
        self.milestones.load()?;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), PocketGuardError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update, with a field diff of the two serialized states
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), PocketGuardError> {
        let diff = generate_diff(&serde_json::to_value(before)?, &serde_json::to_value(after)?);
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), PocketGuardError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    pub fn publish(&self, event: ChangeEvent) {
        self.notifier.publish(event);
    }
}
