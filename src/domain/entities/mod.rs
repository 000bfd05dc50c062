pub mod comment;
pub mod interaction;
pub mod notification;
pub mod vote;

pub use comment::{CommentReference, CommentSnapshot};
pub use interaction::{TopicInteraction, WebsiteTopicVotes};
pub use notification::{coalesce, CoalescedNotification, Notification, NotificationAction};
pub use vote::VoteCount;
