//! Milestone model
//!
//! A milestone is a savings goal: a task the user sets themselves and the
//! reward they promise for completing it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MilestoneId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: MilestoneId,
    pub task: String,
    pub reward: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Milestone {
    pub fn new(task: impl Into<String>, reward: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: MilestoneId::new(),
            task: task.into(),
            reward: reward.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the milestone as completed
    pub fn complete(&mut self) {
        self.completed = true;
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), MilestoneValidationError> {
        if self.task.trim().is_empty() {
            return Err(MilestoneValidationError::EmptyTask);
        }
        if self.reward.trim().is_empty() {
            return Err(MilestoneValidationError::EmptyReward);
        }
        Ok(())
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "x" } else { " " };
        write!(f, "[{}] {} -> {}", mark, self.task, self.reward)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MilestoneValidationError {
    EmptyTask,
    EmptyReward,
}

impl fmt::Display for MilestoneValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTask => write!(f, "Milestone task cannot be empty"),
            Self::EmptyReward => write!(f, "Milestone reward cannot be empty"),
        }
    }
}

impl std::error::Error for MilestoneValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_milestone_is_open() {
        let milestone = Milestone::new("Save 5000", "Concert tickets");
        assert!(!milestone.completed);
        assert!(milestone.validate().is_ok());
        assert_eq!(milestone.to_string(), "[ ] Save 5000 -> Concert tickets");
    }

    #[test]
    fn test_complete() {
        let mut milestone = Milestone::new("No takeout for a month", "New headphones");
        milestone.complete();
        assert!(milestone.completed);
        assert!(milestone.updated_at >= milestone.created_at);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            Milestone::new("", "Cake").validate(),
            Err(MilestoneValidationError::EmptyTask)
        );
        assert_eq!(
            Milestone::new("Walk to work", "  ").validate(),
            Err(MilestoneValidationError::EmptyReward)
        );
    }
}
