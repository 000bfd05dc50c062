use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::application::ports::cache::{CacheReader, CacheWriter, Local};
use crate::shared::error::Result;

/// In-process cache store. Every write is stamped with the wall-clock time so
/// the fetcher's expiry policies can reason about staleness.
pub struct MemoryStore<T: Clone> {
    entries: Arc<RwLock<HashMap<String, Local<T>>>>,
}

impl<T> MemoryStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Inserts an entry with an explicit write stamp, for seeding stores
    /// with known-age entries.
    pub async fn insert_written_at(&self, key: &str, value: T, at: DateTime<Utc>) {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), Local::written_at(value, at));
    }

    pub async fn remove(&self, key: &str) -> Option<T> {
        let mut entries = self.entries.write().await;
        entries.remove(key).map(Local::into_value)
    }

    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<T> Default for MemoryStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> CacheReader<T> for MemoryStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Result<Option<Local<T>>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }
}

#[async_trait]
impl<T> CacheWriter<T> for MemoryStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn set(&self, key: &str, value: T) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), Local::written_at(value, Utc::now()));
        Ok(())
    }
}
