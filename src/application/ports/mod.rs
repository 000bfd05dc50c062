pub mod cache;
pub mod notifications;
pub mod remote;

pub use cache::{CacheReader, CacheWriter, Local};
pub use notifications::NotificationFeed;
pub use remote::RemoteSource;
