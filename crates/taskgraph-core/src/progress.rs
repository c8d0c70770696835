use serde::{Deserialize, Serialize};

use crate::breakdown::Breakdown;

/// Completion summary for one breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
    /// `completed / total * 100`, or `0.0` when there are no subtasks.
    pub percentage: f64,
}

impl Progress {
    pub fn of(breakdown: &Breakdown) -> Self {
        let total = breakdown.subtasks.len();
        let completed = breakdown.completed_count();
        let percentage = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };
        Self {
            total,
            completed,
            percentage,
        }
    }
}
