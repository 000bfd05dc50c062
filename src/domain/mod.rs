pub mod affinity;
pub mod entities;
pub mod ranking;

pub use affinity::{topic_taste_score, website_topic_affinity_score};
pub use entities::{
    coalesce, CoalescedNotification, CommentReference, CommentSnapshot, Notification,
    NotificationAction, TopicInteraction, VoteCount, WebsiteTopicVotes,
};
pub use ranking::{controversy_score, hot_score, rank_comments, wilson_lower_bound, RankOrder};
