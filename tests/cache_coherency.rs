use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing_subscriber::EnvFilter;

use sidenote_core::application::ports::cache::{CacheReader, CacheWriter};
use sidenote_core::application::ports::remote::RemoteSource;
use sidenote_core::shared::error::{AppError, Result};
use sidenote_core::{CacheCoherentFetcher, FetchPolicy, MemoryStore};

static INIT_TRACING: Once = Once::new();

// Makes the fetcher's debug/warn output visible under --nocapture.
fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .compact()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

struct CountingRemote {
    value: String,
    calls: AtomicUsize,
}

impl CountingRemote {
    fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteSource<String> for CountingRemote {
    async fn fetch(&self, _key: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.value.clone())
    }
}

struct FailingRemote;

#[async_trait]
impl RemoteSource<String> for FailingRemote {
    async fn fetch(&self, key: &str) -> Result<String> {
        Err(AppError::Network(format!("unreachable for {key}")))
    }
}

fn fetcher_over(
    store: Arc<MemoryStore<String>>,
    remote: Arc<dyn RemoteSource<String>>,
) -> CacheCoherentFetcher<String> {
    CacheCoherentFetcher::new(
        store.clone() as Arc<dyn CacheReader<String>>,
        remote,
        Some(store as Arc<dyn CacheWriter<String>>),
    )
}

#[tokio::test]
async fn network_only_then_cache_only_round_trips() {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    let remote = Arc::new(CountingRemote::new("hello"));
    let fetcher = fetcher_over(store.clone(), remote.clone());

    let fetched = fetcher
        .fetch("comments/c1", FetchPolicy::NetworkOnly)
        .await
        .unwrap();
    assert_eq!(fetched, "hello");

    let cached = fetcher
        .fetch("comments/c1", FetchPolicy::CacheOnly)
        .await
        .unwrap();
    assert_eq!(cached, "hello");
    assert_eq!(remote.calls(), 1);
}

#[tokio::test]
async fn expiry_window_gates_the_network_fetch() {
    init_tracing();
    let window = Duration::minutes(30);
    let store = Arc::new(MemoryStore::new());
    let remote = Arc::new(CountingRemote::new("from-network"));
    let fetcher = fetcher_over(store.clone(), remote.clone());

    // One millisecond inside the window: must be served locally. Seeded
    // immediately before the read so almost no wall-clock time erodes the
    // margin.
    store
        .insert_written_at(
            "k",
            "fresh-enough".to_string(),
            Utc::now() - window + Duration::milliseconds(1),
        )
        .await;
    let value = fetcher
        .fetch_with_expiry("k", FetchPolicy::NetworkIfCacheExpired, window)
        .await
        .unwrap();
    assert_eq!(value, "fresh-enough");
    assert_eq!(remote.calls(), 0);

    // One millisecond past the window: must refetch.
    store
        .insert_written_at(
            "k",
            "stale".to_string(),
            Utc::now() - window - Duration::milliseconds(1),
        )
        .await;
    let value = fetcher
        .fetch_with_expiry("k", FetchPolicy::NetworkIfCacheExpired, window)
        .await
        .unwrap();
    assert_eq!(value, "from-network");
    assert_eq!(remote.calls(), 1);

    // The refetch restamped the entry, so the next read is served locally.
    let value = fetcher
        .fetch_with_expiry("k", FetchPolicy::NetworkIfCacheExpired, window)
        .await
        .unwrap();
    assert_eq!(value, "from-network");
    assert_eq!(remote.calls(), 1);
}

#[tokio::test]
async fn cache_and_network_refreshes_in_the_background() {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    store
        .insert_written_at("k", "old".to_string(), Utc::now() - Duration::hours(1))
        .await;
    let remote = Arc::new(CountingRemote::new("new"));
    let fetcher = fetcher_over(store.clone(), remote.clone());

    let served = fetcher
        .fetch("k", FetchPolicy::CacheAndNetwork)
        .await
        .unwrap();
    assert_eq!(served, "old");

    // Wait for the fire-and-forget refresh to land.
    let mut refreshed = String::new();
    for _ in 0..50 {
        tokio::time::sleep(StdDuration::from_millis(10)).await;
        if let Some(entry) = store.get("k").await.unwrap() {
            refreshed = entry.into_value();
            if refreshed == "new" {
                break;
            }
        }
    }
    assert_eq!(refreshed, "new");
}

#[tokio::test]
async fn cache_and_network_miss_returns_network_value() {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    let remote = Arc::new(CountingRemote::new("first"));
    let fetcher = fetcher_over(store.clone(), remote.clone());

    let value = fetcher
        .fetch("k", FetchPolicy::CacheAndNetwork)
        .await
        .unwrap();
    assert_eq!(value, "first");
    assert_eq!(remote.calls(), 1);
}

#[tokio::test]
async fn background_refresh_failure_does_not_fail_the_read() {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    store
        .insert_written_at("k", "cached".to_string(), Utc::now())
        .await;
    let fetcher = fetcher_over(store.clone(), Arc::new(FailingRemote));

    let value = fetcher
        .fetch("k", FetchPolicy::CacheAndNetwork)
        .await
        .unwrap();
    assert_eq!(value, "cached");

    // Give the failed refresh a chance to run; the cached value survives it.
    tokio::time::sleep(StdDuration::from_millis(20)).await;
    let entry = store.get("k").await.unwrap().unwrap();
    assert_eq!(entry.into_value(), "cached");
}
