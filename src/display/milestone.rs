//! Milestone table formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Milestone;

#[derive(Tabled)]
struct MilestoneRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Done")]
    done: &'static str,
    #[tabled(rename = "Task")]
    task: String,
    #[tabled(rename = "Reward")]
    reward: String,
}

pub fn format_milestone_list(milestones: &[Milestone]) -> String {
    if milestones.is_empty() {
        return "No milestones yet.\n".to_string();
    }

    let rows = milestones.iter().map(|m| MilestoneRow {
        id: m.id.to_string(),
        done: if m.completed { "x" } else { "" },
        task: m.task.clone(),
        reward: m.reward.clone(),
    });

    let completed = milestones.iter().filter(|m| m.completed).count();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n{} of {} completed\n", table, completed, milestones.len())
}
