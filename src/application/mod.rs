pub mod ports;
pub mod services;

pub use ports::{CacheReader, CacheWriter, Local, NotificationFeed, RemoteSource};
pub use services::{CacheCoherentFetcher, FetchPolicy, NotificationService};
