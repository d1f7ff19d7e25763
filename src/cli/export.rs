//! CLI commands for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::{PocketGuardError, PocketGuardResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export settings, expenses and milestones as JSON
    Json {
        output: PathBuf,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Export settings, expenses and milestones as YAML
    Yaml { output: PathBuf },

    /// Export expenses as CSV
    Csv { output: PathBuf },
}

pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> PocketGuardResult<()> {
    match cmd {
        ExportCommands::Json { output, pretty } => {
            let mut writer = create_output(&output)?;
            export_full_json(storage, &mut writer, pretty)?;
            finish(writer, &output)?;
            println!("Exported data to {}", output.display());
        }
        ExportCommands::Yaml { output } => {
            let mut writer = create_output(&output)?;
            export_full_yaml(storage, &mut writer)?;
            finish(writer, &output)?;
            println!("Exported data to {}", output.display());
        }
        ExportCommands::Csv { output } => {
            let mut writer = create_output(&output)?;
            let count = export_expenses_csv(storage, &mut writer)?;
            finish(writer, &output)?;
            println!("Exported {} expenses to {}", count, output.display());
        }
    }

    Ok(())
}

fn create_output(path: &Path) -> PocketGuardResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        PocketGuardError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

fn finish(mut writer: BufWriter<File>, path: &Path) -> PocketGuardResult<()> {
    writer.flush().map_err(|e| {
        PocketGuardError::Export(format!("Failed to write {}: {}", path.display(), e))
    })
}
