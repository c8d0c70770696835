use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::complexity::ComplexityTier;
use crate::template::Archetype;

/// Current persisted layout of a [`Breakdown`].
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    1
}

/// One node in a decomposition graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    /// Unique within the owning breakdown and stable across saves.
    pub id: String,
    pub title: String,
    pub description: String,
    pub estimated_duration_minutes: u32,
    pub order: u32,
    pub completed: bool,
    /// Ids in the same breakdown that must be completed first.
    #[serde(default)]
    pub depends_on: Vec<String>,
}

/// The subtask DAG built for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub original_task_text: String,
    pub subtasks: Vec<Subtask>,
    /// Sum of subtask durations at build time.
    pub total_estimated_minutes: u32,
    pub complexity_tier: ComplexityTier,
    pub archetype: Archetype,
    pub strategy_description: String,
    pub created_at: DateTime<Utc>,
}

impl Breakdown {
    pub fn subtask(&self, id: &str) -> Option<&Subtask> {
        self.subtasks.iter().find(|s| s.id == id)
    }

    pub fn subtask_mut(&mut self, id: &str) -> Option<&mut Subtask> {
        self.subtasks.iter_mut().find(|s| s.id == id)
    }

    /// Set `completed` on one subtask. Returns `false` if the id is unknown.
    pub fn set_completed(&mut self, id: &str, completed: bool) -> bool {
        match self.subtask_mut(id) {
            Some(subtask) => {
                subtask.completed = completed;
                true
            }
            None => false,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.subtasks.iter().filter(|s| s.completed).count()
    }

    pub fn is_complete(&self) -> bool {
        !self.subtasks.is_empty() && self.subtasks.iter().all(|s| s.completed)
    }

    /// Minutes still outstanding across incomplete subtasks.
    pub fn remaining_minutes(&self) -> u64 {
        self.subtasks
            .iter()
            .filter(|s| !s.completed)
            .map(|s| u64::from(s.estimated_duration_minutes))
            .sum()
    }

    /// Copy completion flags from an earlier breakdown of the same task.
    ///
    /// A flag carries over only when both `id` and `title` match, so a
    /// rebuild that picked a different archetype or tier keeps nothing it
    /// cannot line up. Returns the number of subtasks marked completed.
    pub fn carry_completion_from(&mut self, previous: &Breakdown) -> usize {
        let mut carried = 0;
        for subtask in &mut self.subtasks {
            let done = previous
                .subtask(&subtask.id)
                .is_some_and(|p| p.title == subtask.title && p.completed);
            if done {
                subtask.completed = true;
                carried += 1;
            }
        }
        carried
    }
}
