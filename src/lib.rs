//! Ranking and cache-coherency core for the Sidenote social annotation
//! platform.
//!
//! The crate owns the pure scoring math (controversy, Wilson-bound
//! popularity, time-decayed hotness, topic affinity), the policy engine that
//! reconciles the local cache with the network on every read, and the pass
//! that collapses repeat notifications. Persistence, the remote procedure
//! layer and the notification backend stay behind ports.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::{
    CacheCoherentFetcher, CacheReader, CacheWriter, FetchPolicy, Local, NotificationFeed,
    NotificationService, RemoteSource,
};
pub use domain::{
    coalesce, controversy_score, hot_score, rank_comments, topic_taste_score,
    website_topic_affinity_score, wilson_lower_bound, CoalescedNotification, CommentReference,
    CommentSnapshot, Notification, NotificationAction, RankOrder, TopicInteraction, VoteCount,
    WebsiteTopicVotes,
};
pub use infrastructure::MemoryStore;
pub use shared::{AffinityConfig, AppError, CacheConfig, CoreConfig, RankingConfig, Result};
