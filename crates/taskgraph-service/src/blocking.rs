use std::sync::Arc;

use taskgraph_core::{Breakdown, CriticalPath, Progress, Subtask};
use taskgraph_store::{ObjectStore, StoreConfig};
use tokio::runtime::{Builder, Runtime};

use crate::{BreakdownStore, ServiceError};

/// Blocking wrapper around [`BreakdownStore`].
///
/// Owns a current-thread tokio runtime and uses `block_on()` for each call.
/// Meant for sync callers; do not call it from inside another runtime.
pub struct BlockingBreakdownStore {
    inner: BreakdownStore,
    rt: Runtime,
}

impl BlockingBreakdownStore {
    pub fn new(backend: Arc<dyn ObjectStore>) -> Result<Self, ServiceError> {
        Ok(Self {
            inner: BreakdownStore::new(backend),
            rt: runtime()?,
        })
    }

    pub fn from_config(config: &StoreConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            inner: BreakdownStore::from_config(config)?,
            rt: runtime()?,
        })
    }

    pub fn save(&self, task_id: &str, breakdown: &Breakdown) -> Result<(), ServiceError> {
        self.rt.block_on(self.inner.save(task_id, breakdown))
    }

    pub fn load(&self, task_id: &str) -> Result<Option<Breakdown>, ServiceError> {
        self.rt.block_on(self.inner.load(task_id))
    }

    pub fn set_subtask_completion(
        &self,
        task_id: &str,
        subtask_id: &str,
        completed: bool,
    ) -> Result<bool, ServiceError> {
        self.rt
            .block_on(self.inner.set_subtask_completion(task_id, subtask_id, completed))
    }

    pub fn decompose(
        &self,
        task_id: &str,
        title: &str,
        description: &str,
    ) -> Result<Breakdown, ServiceError> {
        self.rt
            .block_on(self.inner.decompose(task_id, title, description))
    }

    pub fn progress(&self, task_id: &str) -> Result<Option<Progress>, ServiceError> {
        self.rt.block_on(self.inner.progress(task_id))
    }

    pub fn critical_path(&self, task_id: &str) -> Result<Option<CriticalPath>, ServiceError> {
        self.rt.block_on(self.inner.critical_path(task_id))
    }

    pub fn ready_subtasks(&self, task_id: &str) -> Result<Option<Vec<Subtask>>, ServiceError> {
        self.rt.block_on(self.inner.ready_subtasks(task_id))
    }
}

fn runtime() -> Result<Runtime, ServiceError> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ServiceError::Internal(format!("failed to create tokio runtime: {e}")))
}
