//! Audit logging
//!
//! Every create, update and delete on expenses, milestones and settings is
//! appended to `audit.log` as one JSON line carrying the before/after
//! snapshots. Updates also carry a short field diff from [`generate_diff`].

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
