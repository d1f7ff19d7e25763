//! CLI command for reading the audit log

use crate::error::PocketGuardResult;
use crate::storage::Storage;

pub fn handle_audit_command(storage: &Storage, count: usize) -> PocketGuardResult<()> {
    let entries = storage.audit().read_recent(count)?;
    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in entries.iter().rev() {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
