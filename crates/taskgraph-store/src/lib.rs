mod local;
mod memory;

pub use local::LocalStore;
pub use memory::MemoryStore;

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("store error: {0}")]
    Internal(String),
}

/// A namespaced key-value backend holding opaque blobs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write (create or overwrite) an object.
    async fn put(&self, key: &str, data: Bytes) -> Result<(), StoreError>;

    /// Read an object. Returns `StoreError::NotFound` if absent.
    async fn get(&self, key: &str) -> Result<Bytes, StoreError>;

    /// Read an object, returning `None` if it does not exist.
    async fn get_opt(&self, key: &str) -> Result<Option<Bytes>, StoreError> {
        match self.get(key).await {
            Ok(data) => Ok(Some(data)),
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Check if an object exists. Backends that can answer without reading
    /// the payload should override this.
    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get_opt(key).await?.is_some())
    }
}

// -- Key helpers --

pub fn breakdown_key(task_id: &str) -> String {
    format!("breakdowns/{task_id}.json")
}

// -- Configuration --

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Files under a data directory.
    Local,
    /// Process-local map; contents vanish with the process.
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Local => "local",
            StoreBackend::Memory => "memory",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "local" => Some(StoreBackend::Local),
            "memory" => Some(StoreBackend::Memory),
            _ => None,
        }
    }
}

/// Configuration for the persistence backend.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Base directory for the local backend. When `None`, the platform
    /// data directory is used.
    pub local_data_dir: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Local,
            local_data_dir: None,
        }
    }
}

impl StoreConfig {
    /// Build from environment variables.
    ///
    /// `TASKGRAPH_STORE` selects the backend (`local` when unset) and
    /// `TASKGRAPH_DATA_DIR` overrides the local data directory.
    pub fn from_env() -> Result<Self, StoreError> {
        let backend = match std::env::var("TASKGRAPH_STORE") {
            Ok(value) => StoreBackend::parse_str(value.trim()).ok_or_else(|| {
                StoreError::Config(format!("unknown TASKGRAPH_STORE backend: {value}"))
            })?,
            Err(_) => StoreBackend::Local,
        };
        Ok(Self {
            backend,
            local_data_dir: std::env::var("TASKGRAPH_DATA_DIR").ok(),
        })
    }

    pub fn memory() -> Self {
        Self {
            backend: StoreBackend::Memory,
            local_data_dir: None,
        }
    }

    pub fn local(dir: impl Into<String>) -> Self {
        Self {
            backend: StoreBackend::Local,
            local_data_dir: Some(dir.into()),
        }
    }
}

// -- Factory --

/// Create an `ObjectStore` from configuration.
pub fn create_store(config: &StoreConfig) -> Result<Arc<dyn ObjectStore>, StoreError> {
    tracing::debug!(backend = config.backend.as_str(), "creating store");
    match config.backend {
        StoreBackend::Local => Ok(Arc::new(LocalStore::new(config))),
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
    }
}
