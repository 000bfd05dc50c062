use async_trait::async_trait;

use crate::shared::error::Result;

/// One remote read per invocation. Timeouts and cancellation are the
/// implementation's responsibility; the fetcher never retries.
#[async_trait]
pub trait RemoteSource<T>: Send + Sync {
    async fn fetch(&self, key: &str) -> Result<T>;
}
