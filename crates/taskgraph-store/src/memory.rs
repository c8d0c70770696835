use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use bytes::Bytes;

use crate::{ObjectStore, StoreError};

/// In-process backend, mainly for tests and ephemeral hosts.
#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<BTreeMap<String, Bytes>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored object, ordered by key.
    pub fn snapshot(&self) -> Result<BTreeMap<String, Bytes>, StoreError> {
        let objects = self
            .objects
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".into()))?;
        Ok(objects.clone())
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put(&self, key: &str, data: Bytes) -> Result<(), StoreError> {
        let mut objects = self
            .objects
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".into()))?;
        objects.insert(key.to_string(), data);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Bytes, StoreError> {
        let objects = self
            .objects
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".into()))?;
        objects
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }
}
