//! Milestone repository, persisted to `data/milestones.json`

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::PocketGuardError;
use crate::models::{Milestone, MilestoneId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Default, Serialize, Deserialize)]
struct MilestoneData {
    milestones: Vec<Milestone>,
}

pub struct MilestoneRepository {
    path: PathBuf,
    data: RwLock<HashMap<MilestoneId, Milestone>>,
}

impl MilestoneRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), PocketGuardError> {
        let file_data: MilestoneData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| PocketGuardError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        data.extend(file_data.milestones.into_iter().map(|m| (m.id, m)));
        Ok(())
    }

    pub fn save(&self) -> Result<(), PocketGuardError> {
        let milestones = self.get_all()?;
        write_json_atomic(&self.path, &MilestoneData { milestones })
    }

    pub fn get(&self, id: MilestoneId) -> Result<Option<Milestone>, PocketGuardError> {
        let data = self
            .data
            .read()
            .map_err(|e| PocketGuardError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.get(&id).cloned())
    }

    /// Open milestones first, each group oldest first
    pub fn get_all(&self) -> Result<Vec<Milestone>, PocketGuardError> {
        let data = self
            .data
            .read()
            .map_err(|e| PocketGuardError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut milestones: Vec<_> = data.values().cloned().collect();
        milestones.sort_by(|a, b| {
            a.completed
                .cmp(&b.completed)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(milestones)
    }

    pub fn find_matching(&self, identifier: &str) -> Result<Vec<Milestone>, PocketGuardError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|m| m.id.matches(identifier))
            .collect())
    }

    pub fn upsert(&self, milestone: Milestone) -> Result<(), PocketGuardError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PocketGuardError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.insert(milestone.id, milestone);
        Ok(())
    }

    pub fn delete(&self, id: MilestoneId) -> Result<Option<Milestone>, PocketGuardError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PocketGuardError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(data.remove(&id))
    }

    pub fn count(&self) -> Result<usize, PocketGuardError> {
        let data = self
            .data
            .read()
            .map_err(|e| PocketGuardError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
