//! Milestone service

use tracing::info;

use crate::audit::EntityType;
use crate::error::{PocketGuardError, PocketGuardResult};
use crate::events::ChangeEvent;
use crate::models::Milestone;
use crate::storage::Storage;

/// Optional field updates for [`MilestoneService::edit`]
#[derive(Debug, Clone, Default)]
pub struct MilestoneUpdate {
    pub task: Option<String>,
    pub reward: Option<String>,
    pub completed: Option<bool>,
}

impl MilestoneUpdate {
    pub fn is_empty(&self) -> bool {
        self.task.is_none() && self.reward.is_none() && self.completed.is_none()
    }
}

pub struct MilestoneService<'a> {
    storage: &'a Storage,
}

impl<'a> MilestoneService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(&self, task: &str, reward: &str) -> PocketGuardResult<Milestone> {
        let milestone = Milestone::new(task.trim(), reward.trim());
        milestone
            .validate()
            .map_err(|e| PocketGuardError::Validation(e.to_string()))?;

        self.storage.milestones.upsert(milestone.clone())?;
        self.storage.milestones.save()?;

        self.storage.log_create(
            EntityType::Milestone,
            milestone.id.to_string(),
            Some(milestone.task.clone()),
            &milestone,
        )?;
        self.storage.publish(ChangeEvent::Milestones);

        info!(id = %milestone.id, "milestone created");
        Ok(milestone)
    }

    pub fn list(&self) -> PocketGuardResult<Vec<Milestone>> {
        self.storage.milestones.get_all()
    }

    pub fn find(&self, identifier: &str) -> PocketGuardResult<Milestone> {
        let mut matches = self.storage.milestones.find_matching(identifier)?;
        match matches.len() {
            0 => Err(PocketGuardError::milestone_not_found(identifier)),
            1 => Ok(matches.remove(0)),
            _ => Err(PocketGuardError::Ambiguous {
                entity_type: "Milestone",
                identifier: identifier.to_string(),
            }),
        }
    }

    /// Mark a milestone as completed
    pub fn complete(&self, identifier: &str) -> PocketGuardResult<Milestone> {
        self.edit(
            identifier,
            MilestoneUpdate {
                completed: Some(true),
                ..MilestoneUpdate::default()
            },
        )
    }

    /// Apply the given field updates
    ///
    /// An update that changes nothing is not written or audited.
    pub fn edit(&self, identifier: &str, update: MilestoneUpdate) -> PocketGuardResult<Milestone> {
        let before = self.find(identifier)?;
        let mut milestone = before.clone();

        if let Some(task) = update.task {
            milestone.task = task.trim().to_string();
        }
        if let Some(reward) = update.reward {
            milestone.reward = reward.trim().to_string();
        }
        match update.completed {
            Some(true) if !milestone.completed => milestone.complete(),
            Some(flag) => milestone.completed = flag,
            None => {}
        }

        milestone
            .validate()
            .map_err(|e| PocketGuardError::Validation(e.to_string()))?;

        if milestone.task == before.task
            && milestone.reward == before.reward
            && milestone.completed == before.completed
        {
            return Ok(before);
        }
        milestone.updated_at = chrono::Utc::now();

        self.storage.milestones.upsert(milestone.clone())?;
        self.storage.milestones.save()?;

        self.storage.log_update(
            EntityType::Milestone,
            milestone.id.to_string(),
            Some(milestone.task.clone()),
            &before,
            &milestone,
        )?;
        self.storage.publish(ChangeEvent::Milestones);

        info!(id = %milestone.id, completed = milestone.completed, "milestone updated");
        Ok(milestone)
    }

    pub fn delete(&self, identifier: &str) -> PocketGuardResult<Milestone> {
        let milestone = self.find(identifier)?;

        self.storage.milestones.delete(milestone.id)?;
        self.storage.milestones.save()?;

        self.storage.log_delete(
            EntityType::Milestone,
            milestone.id.to_string(),
            Some(milestone.task.clone()),
            &milestone,
        )?;
        self.storage.publish(ChangeEvent::Milestones);

        info!(id = %milestone.id, "milestone deleted");
        Ok(milestone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::PocketGuardPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketGuardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_requires_task_and_reward() {
        let (_temp, storage) = create_test_storage();
        let service = MilestoneService::new(&storage);

        assert!(service.create("", "Cake").unwrap_err().is_validation());
        assert!(service.create("Save 5000", " ").unwrap_err().is_validation());

        let milestone = service.create("Save 5000", "Concert tickets").unwrap();
        assert!(!milestone.completed);
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_complete_is_audited_with_diff() {
        let (_temp, storage) = create_test_storage();
        let service = MilestoneService::new(&storage);

        let milestone = service.create("Cook at home", "Dessert").unwrap();
        let done = service.complete(&milestone.id.to_string()).unwrap();
        assert!(done.completed);

        let log = storage.audit().read_all().unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].operation, Operation::Update);
        assert!(log[1]
            .diff_summary
            .as_deref()
            .unwrap()
            .contains("completed: false -> true"));
    }

    #[test]
    fn test_edit_partial_fields() {
        let (_temp, storage) = create_test_storage();
        let service = MilestoneService::new(&storage);
        let milestone = service.create("Walk to work", "Sneakers").unwrap();

        let edited = service
            .edit(
                &milestone.id.to_string(),
                MilestoneUpdate {
                    reward: Some("Running shoes".into()),
                    ..MilestoneUpdate::default()
                },
            )
            .unwrap();

        assert_eq!(edited.task, "Walk to work");
        assert_eq!(edited.reward, "Running shoes");

        let reopened = service
            .edit(
                &milestone.id.to_string(),
                MilestoneUpdate {
                    completed: Some(false),
                    ..MilestoneUpdate::default()
                },
            )
            .unwrap();
        assert!(!reopened.completed);
    }

    #[test]
    fn test_noop_edit_is_not_audited() {
        let (_temp, storage) = create_test_storage();
        let service = MilestoneService::new(&storage);
        let milestone = service.create("Walk to work", "Sneakers").unwrap();

        service
            .edit(&milestone.id.to_string(), MilestoneUpdate::default())
            .unwrap();
        assert_eq!(storage.audit().entry_count().unwrap(), 1);
    }

    #[test]
    fn test_edit_cannot_blank_fields() {
        let (_temp, storage) = create_test_storage();
        let service = MilestoneService::new(&storage);
        let milestone = service.create("Walk to work", "Sneakers").unwrap();

        let err = service
            .edit(
                &milestone.id.to_string(),
                MilestoneUpdate {
                    task: Some("   ".into()),
                    ..MilestoneUpdate::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_delete_and_not_found() {
        let (_temp, storage) = create_test_storage();
        let changes = storage.notifier().subscribe();
        let service = MilestoneService::new(&storage);

        let milestone = service.create("No takeout", "Headphones").unwrap();
        service.delete(&milestone.id.to_string()).unwrap();

        assert!(service.list().unwrap().is_empty());
        assert!(service.delete(&milestone.id.to_string()).unwrap_err().is_not_found());
        assert_eq!(changes.try_iter().count(), 2);
    }
}
