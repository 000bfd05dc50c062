use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, warn};

use crate::application::ports::cache::{CacheReader, CacheWriter, Local};
use crate::application::ports::remote::RemoteSource;
use crate::shared::config::CacheConfig;
use crate::shared::error::{AppError, Result};

/// Per-call strategy for reconciling the local cache with the network.
/// Never persisted; each call site picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Serve cache when present and refresh in the background; otherwise
    /// fetch and cache without blocking on the write.
    CacheAndNetwork,
    /// Serve cache when present; fetch and cache (awaited) on a miss.
    CacheFirst,
    /// Serve cache verbatim; a miss is a failure. Never touches the network.
    CacheOnly,
    /// Always fetch, cache (awaited), return the fetched value.
    NetworkOnly,
    /// Always fetch; never read or write the cache.
    NoCache,
    /// Serve cache while its local write is younger than the expiry window;
    /// otherwise fetch and cache (awaited).
    NetworkIfCacheExpired,
}

/// Policy-driven read path over an injected cache store and remote source.
///
/// Holds no state of its own; concurrent reads for the same key may race and
/// issue duplicate fetches, which is accepted. Background refreshes never
/// fail the read that triggered them.
pub struct CacheCoherentFetcher<T> {
    cache: Arc<dyn CacheReader<T>>,
    remote: Arc<dyn RemoteSource<T>>,
    writer: Option<Arc<dyn CacheWriter<T>>>,
    expiry_window: Duration,
}

impl<T> CacheCoherentFetcher<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(
        cache: Arc<dyn CacheReader<T>>,
        remote: Arc<dyn RemoteSource<T>>,
        writer: Option<Arc<dyn CacheWriter<T>>>,
    ) -> Self {
        Self {
            cache,
            remote,
            writer,
            expiry_window: Duration::seconds(CacheConfig::default().expiry_window_secs),
        }
    }

    pub fn with_expiry_window(mut self, window: Duration) -> Self {
        self.expiry_window = window;
        self
    }

    pub async fn fetch(&self, key: &str, policy: FetchPolicy) -> Result<T> {
        self.fetch_with_expiry(key, policy, self.expiry_window).await
    }

    /// Same as [`fetch`](Self::fetch) with a per-call expiry window for
    /// `NetworkIfCacheExpired`.
    pub async fn fetch_with_expiry(
        &self,
        key: &str,
        policy: FetchPolicy,
        expiry_window: Duration,
    ) -> Result<T> {
        let result = self.dispatch(key, policy, expiry_window).await;
        if let Err(err) = &result {
            warn!(error = %err, key, policy = ?policy, "fetch failed");
        }
        result
    }

    async fn dispatch(&self, key: &str, policy: FetchPolicy, expiry_window: Duration) -> Result<T> {
        match policy {
            FetchPolicy::CacheOnly => {
                let cached = self.cache.get(key).await?;
                cached
                    .map(Local::into_value)
                    .ok_or_else(|| AppError::Cache(format!("no cached value for key {key}")))
            }
            FetchPolicy::NoCache => self.remote.fetch(key).await,
            FetchPolicy::NetworkOnly => {
                let writer = self.require_writer(policy)?;
                let value = self.remote.fetch(key).await?;
                writer.set(key, value.clone()).await?;
                Ok(value)
            }
            FetchPolicy::CacheFirst => {
                if let Some(cached) = self.cache.get(key).await? {
                    debug!(key, "serving cache");
                    return Ok(cached.into_value());
                }
                let writer = self.require_writer(policy)?;
                let value = self.remote.fetch(key).await?;
                writer.set(key, value.clone()).await?;
                Ok(value)
            }
            FetchPolicy::CacheAndNetwork => {
                let writer = self.require_writer(policy)?;
                match self.cache.get(key).await? {
                    Some(cached) => {
                        debug!(key, "serving cache, refreshing in background");
                        self.spawn_refresh(key, writer);
                        Ok(cached.into_value())
                    }
                    None => {
                        let value = self.remote.fetch(key).await?;
                        self.spawn_write(key, writer, value.clone());
                        Ok(value)
                    }
                }
            }
            FetchPolicy::NetworkIfCacheExpired => {
                let writer = self.require_writer(policy)?;
                if let Some(cached) = self.cache.get(key).await? {
                    // An entry with no local write stamp cannot prove its
                    // freshness and counts as expired.
                    let fresh = cached
                        .last_updated_locally
                        .map(|at| Utc::now() - at <= expiry_window)
                        .unwrap_or(false);
                    if fresh {
                        debug!(key, "cache within expiry window");
                        return Ok(cached.into_value());
                    }
                }
                let value = self.remote.fetch(key).await?;
                writer.set(key, value.clone()).await?;
                Ok(value)
            }
        }
    }

    fn require_writer(&self, policy: FetchPolicy) -> Result<Arc<dyn CacheWriter<T>>> {
        self.writer.clone().ok_or_else(|| {
            AppError::Configuration(format!("cache writer required for {policy:?} policy"))
        })
    }

    // Refresh failures are logged, never propagated to the read that
    // triggered them.
    fn spawn_refresh(&self, key: &str, writer: Arc<dyn CacheWriter<T>>) {
        let remote = Arc::clone(&self.remote);
        let key = key.to_string();
        tokio::spawn(async move {
            match remote.fetch(&key).await {
                Ok(value) => {
                    if let Err(err) = writer.set(&key, value).await {
                        warn!(error = %err, key = %key, "background recache failed");
                    }
                }
                Err(err) => warn!(error = %err, key = %key, "background refresh failed"),
            }
        });
    }

    fn spawn_write(&self, key: &str, writer: Arc<dyn CacheWriter<T>>, value: T) {
        let key = key.to_string();
        tokio::spawn(async move {
            if let Err(err) = writer.set(&key, value).await {
                warn!(error = %err, key = %key, "background recache failed");
            }
        });
    }
}
