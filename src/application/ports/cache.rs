use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::Result;

/// Cache envelope carrying the staleness marker.
///
/// Only cache writers produce this; the fetcher strips the marker before a
/// value reaches a consumer, so cached and fresh values look the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Local<T> {
    pub value: T,
    pub last_updated_locally: Option<DateTime<Utc>>,
}

impl<T> Local<T> {
    pub fn written_at(value: T, at: DateTime<Utc>) -> Self {
        Self {
            value,
            last_updated_locally: Some(at),
        }
    }

    /// Strips the staleness marker.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Read side of the local key-value store.
#[async_trait]
pub trait CacheReader<T>: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Local<T>>>;
}

/// Write side of the local key-value store. Implementations stamp
/// `last_updated_locally` on every write.
#[async_trait]
pub trait CacheWriter<T>: Send + Sync {
    async fn set(&self, key: &str, value: T) -> Result<()>;
}
