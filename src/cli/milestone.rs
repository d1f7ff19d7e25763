//! CLI commands for milestones

use clap::Subcommand;

use crate::display::format_milestone_list;
use crate::error::{PocketGuardError, PocketGuardResult};
use crate::services::{MilestoneService, MilestoneUpdate};
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum MilestoneCommands {
    /// Add a savings milestone
    Add {
        /// The goal to reach
        task: String,
        /// The reward for reaching it
        reward: String,
    },

    /// List milestones, open ones first
    #[command(alias = "ls")]
    List,

    /// Mark a milestone as completed
    #[command(alias = "done")]
    Complete {
        /// Milestone ID (short form or prefix)
        id: String,
    },

    /// Change a milestone's task, reward or completion
    Edit {
        /// Milestone ID (short form or prefix)
        id: String,
        #[arg(short, long)]
        task: Option<String>,
        #[arg(short, long)]
        reward: Option<String>,
        /// Set completion explicitly (true/false)
        #[arg(long)]
        completed: Option<bool>,
    },

    /// Delete a milestone
    #[command(alias = "rm")]
    Delete {
        /// Milestone ID (short form or prefix)
        id: String,
    },
}

pub fn handle_milestone_command(storage: &Storage, cmd: MilestoneCommands) -> PocketGuardResult<()> {
    let service = MilestoneService::new(storage);

    match cmd {
        MilestoneCommands::Add { task, reward } => {
            let milestone = service.create(&task, &reward)?;
            println!("Created milestone {}: {}", milestone.id, milestone);
        }
        MilestoneCommands::List => {
            print!("{}", format_milestone_list(&service.list()?));
        }
        MilestoneCommands::Complete { id } => {
            let milestone = service.complete(&id)?;
            println!("Completed {}: enjoy your {}!", milestone.task, milestone.reward);
        }
        MilestoneCommands::Edit {
            id,
            task,
            reward,
            completed,
        } => {
            let update = MilestoneUpdate {
                task,
                reward,
                completed,
            };
            if update.is_empty() {
                return Err(PocketGuardError::Validation(
                    "Nothing to change: pass --task, --reward or --completed".into(),
                ));
            }
            let milestone = service.edit(&id, update)?;
            println!("Updated milestone {}: {}", milestone.id, milestone);
        }
        MilestoneCommands::Delete { id } => {
            let milestone = service.delete(&id)?;
            println!("Deleted milestone {}: {}", milestone.id, milestone.task);
        }
    }

    Ok(())
}
