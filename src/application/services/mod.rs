pub mod fetch_service;
pub mod notification_service;

pub use fetch_service::{CacheCoherentFetcher, FetchPolicy};
pub use notification_service::NotificationService;
