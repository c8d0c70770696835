use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use taskgraph_core::graph::{self, CriticalPath};
use taskgraph_core::{Breakdown, Progress, Subtask, SCHEMA_VERSION};
use taskgraph_store::{breakdown_key, create_store, ObjectStore, StoreConfig};
use tokio::sync::OwnedMutexGuard;
use tracing::{debug, info, warn};

use crate::ServiceError;

/// Longest id whose `{id}.json.tmp` write file still fits a 255-byte file name.
const MAX_TASK_ID_LEN: usize = 255 - ".json.tmp".len();

type LockMap = Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>;

/// Whether `task_id` can name a stored breakdown.
///
/// Ids become part of a storage key, so empty ids, path separators, `..`
/// and control characters are refused.
pub fn is_valid_task_id(task_id: &str) -> bool {
    !task_id.trim().is_empty()
        && task_id.len() <= MAX_TASK_ID_LEN
        && !task_id.contains(|c: char| c == '/' || c == '\\')
        && !task_id.contains("..")
        && !task_id.chars().any(char::is_control)
}

/// Persists one breakdown per task id on top of an [`ObjectStore`].
///
/// Every mutation round-trips the whole breakdown. Writers for the same
/// task id are serialized inside this store, so concurrent completion
/// updates from one process never lose each other's changes.
pub struct BreakdownStore {
    backend: Arc<dyn ObjectStore>,
    locks: LockMap,
}

/// Holds one task id's write lock. Dropping it releases the lock and
/// forgets the entry once no other caller is waiting on it.
struct TaskGuard<'a> {
    locks: &'a LockMap,
    task_id: String,
    lock: Arc<tokio::sync::Mutex<()>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for TaskGuard<'_> {
    fn drop(&mut self) {
        self.guard.take();
        if let Ok(mut locks) = self.locks.lock() {
            // One reference in the map, one here: nobody else is queued
            if Arc::strong_count(&self.lock) == 2 {
                locks.remove(&self.task_id);
            }
        }
    }
}

impl BreakdownStore {
    pub fn new(backend: Arc<dyn ObjectStore>) -> Self {
        Self {
            backend,
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Result<Self, ServiceError> {
        Ok(Self::new(create_store(config)?))
    }

    pub fn backend(&self) -> &Arc<dyn ObjectStore> {
        &self.backend
    }

    async fn lock_task(&self, task_id: &str) -> Result<TaskGuard<'_>, ServiceError> {
        let lock = {
            let mut locks = self
                .locks
                .lock()
                .map_err(|_| ServiceError::Internal("lock poisoned".into()))?;
            locks.entry(task_id.to_string()).or_default().clone()
        };
        let guard = lock.clone().lock_owned().await;
        Ok(TaskGuard {
            locks: &self.locks,
            task_id: task_id.to_string(),
            lock,
            guard: Some(guard),
        })
    }

    /// Store `breakdown` for `task_id`, replacing any previous one.
    ///
    /// Fails with `InvalidInput` for an unusable id, `InvalidGraph` for a
    /// malformed graph (nothing is written in either case) and `Persistence`
    /// when the backend write fails.
    pub async fn save(&self, task_id: &str, breakdown: &Breakdown) -> Result<(), ServiceError> {
        if !is_valid_task_id(task_id) {
            return Err(ServiceError::InvalidInput(format!(
                "invalid task id: {task_id:?}"
            )));
        }
        graph::validate(breakdown)?;

        let _guard = self.lock_task(task_id).await?;
        self.write(task_id, breakdown).await
    }

    /// The breakdown saved for `task_id`, or `None` if there is none.
    ///
    /// Payloads that do not decode, come from a newer schema, or fail graph
    /// validation are treated as absent.
    pub async fn load(&self, task_id: &str) -> Result<Option<Breakdown>, ServiceError> {
        if !is_valid_task_id(task_id) {
            return Ok(None);
        }
        self.read(task_id).await
    }

    /// Mark one subtask completed or not and re-save the whole breakdown.
    ///
    /// Returns `Ok(false)` without writing when the task has no breakdown or
    /// the subtask id is unknown.
    pub async fn set_subtask_completion(
        &self,
        task_id: &str,
        subtask_id: &str,
        completed: bool,
    ) -> Result<bool, ServiceError> {
        if !is_valid_task_id(task_id) {
            return Ok(false);
        }
        if !self.backend.exists(&breakdown_key(task_id)).await? {
            debug!(task_id, "no breakdown to update");
            return Ok(false);
        }

        let _guard = self.lock_task(task_id).await?;

        let Some(mut breakdown) = self.read(task_id).await? else {
            debug!(task_id, "no breakdown to update");
            return Ok(false);
        };
        if !breakdown.set_completed(subtask_id, completed) {
            debug!(task_id, subtask_id, "subtask not found");
            return Ok(false);
        }
        self.write(task_id, &breakdown).await?;
        Ok(true)
    }

    /// Build a fresh breakdown for a task and save it, discarding any
    /// progress recorded on the previous one.
    pub async fn decompose(
        &self,
        task_id: &str,
        title: &str,
        description: &str,
    ) -> Result<Breakdown, ServiceError> {
        let breakdown = taskgraph_core::build(title, description);
        self.save(task_id, &breakdown).await?;
        Ok(breakdown)
    }

    pub async fn progress(&self, task_id: &str) -> Result<Option<Progress>, ServiceError> {
        Ok(self.load(task_id).await?.map(|b| Progress::of(&b)))
    }

    pub async fn critical_path(
        &self,
        task_id: &str,
    ) -> Result<Option<CriticalPath>, ServiceError> {
        match self.load(task_id).await? {
            Some(b) => Ok(Some(graph::critical_path(&b)?)),
            None => Ok(None),
        }
    }

    /// Subtasks that can be started now: incomplete, with every dependency done.
    pub async fn ready_subtasks(
        &self,
        task_id: &str,
    ) -> Result<Option<Vec<Subtask>>, ServiceError> {
        Ok(self
            .load(task_id)
            .await?
            .map(|b| graph::ready_subtasks(&b).into_iter().cloned().collect()))
    }

    async fn read(&self, task_id: &str) -> Result<Option<Breakdown>, ServiceError> {
        let key = breakdown_key(task_id);
        let Some(data) = self.backend.get_opt(&key).await? else {
            return Ok(None);
        };
        Ok(decode(task_id, &data))
    }

    async fn write(&self, task_id: &str, breakdown: &Breakdown) -> Result<(), ServiceError> {
        let key = breakdown_key(task_id);
        let data = serde_json::to_vec(breakdown)
            .map_err(|e| ServiceError::Persistence(format!("serialize {key}: {e}")))?;
        self.backend.put(&key, Bytes::from(data)).await?;
        info!(
            task_id,
            subtasks = breakdown.subtasks.len(),
            completed = breakdown.completed_count(),
            "saved breakdown"
        );
        Ok(())
    }
}

fn decode(task_id: &str, data: &[u8]) -> Option<Breakdown> {
    let breakdown: Breakdown = match serde_json::from_slice(data) {
        Ok(b) => b,
        Err(e) => {
            warn!(task_id, error = %e, "stored breakdown does not decode; treating as absent");
            return None;
        }
    };
    if breakdown.schema_version > SCHEMA_VERSION {
        warn!(
            task_id,
            schema_version = breakdown.schema_version,
            "stored breakdown has a newer schema; treating as absent"
        );
        return None;
    }
    if let Err(e) = graph::validate(&breakdown) {
        warn!(task_id, error = %e, "stored breakdown is not a valid graph; treating as absent");
        return None;
    }
    Some(breakdown)
}
