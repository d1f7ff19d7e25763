//! Full data export as YAML

use std::io::Write;

use crate::error::{PocketGuardError, PocketGuardResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> PocketGuardResult<()> {
    let export = FullExport::from_storage(storage)?;

    write!(
        writer,
        "# PocketGuard data export\n# Generated: {}\n# App version: {}\n\n",
        export.exported_at, export.app_version
    )
    .map_err(|e| PocketGuardError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| PocketGuardError::Export(e.to_string()))
}

pub fn import_from_yaml(yaml: &str) -> PocketGuardResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml).map_err(|e| PocketGuardError::Export(e.to_string()))?;
    export.validate().map_err(PocketGuardError::Export)?;
    Ok(export)
}
