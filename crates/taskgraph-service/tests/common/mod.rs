// Shared fixtures for the service integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use taskgraph_service::BreakdownStore;
use taskgraph_store::{MemoryStore, ObjectStore, StoreError};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Memory backend that counts writes.
#[derive(Default)]
pub struct CountingStore {
    pub inner: MemoryStore,
    puts: AtomicUsize,
}

impl CountingStore {
    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectStore for CountingStore {
    async fn put(&self, key: &str, data: Bytes) -> Result<(), StoreError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(key, data).await
    }

    async fn get(&self, key: &str) -> Result<Bytes, StoreError> {
        self.inner.get(key).await
    }
}

/// Backend whose writes always fail, as with a full disk.
#[derive(Default)]
pub struct ReadOnlyStore {
    pub inner: MemoryStore,
}

#[async_trait]
impl ObjectStore for ReadOnlyStore {
    async fn put(&self, key: &str, _data: Bytes) -> Result<(), StoreError> {
        Err(StoreError::Internal(format!("quota exceeded writing {key}")))
    }

    async fn get(&self, key: &str) -> Result<Bytes, StoreError> {
        self.inner.get(key).await
    }
}

/// Backend that cannot be reached at all.
pub struct UnreachableStore;

#[async_trait]
impl ObjectStore for UnreachableStore {
    async fn put(&self, _key: &str, _data: Bytes) -> Result<(), StoreError> {
        Err(StoreError::Internal("backend unreachable".into()))
    }

    async fn get(&self, _key: &str) -> Result<Bytes, StoreError> {
        Err(StoreError::Internal("backend unreachable".into()))
    }
}

pub fn counting() -> (Arc<CountingStore>, BreakdownStore) {
    init_tracing();
    let backend = Arc::new(CountingStore::default());
    let store = BreakdownStore::new(backend.clone());
    (backend, store)
}
