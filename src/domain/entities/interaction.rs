use serde::{Deserialize, Serialize};

/// Per (user, topic) interaction aggregate.
///
/// Created on the user's first interaction with content carrying the topic,
/// updated monotonically, kept for the lifetime of the account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicInteraction {
    pub upvotes: u64,
    pub downvotes: u64,
    pub not_interested: u64,
}

/// Per (website, topic) vote aggregate, relative to everything voted on
/// across the website.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteTopicVotes {
    pub upvotes: u64,
    pub downvotes: u64,
    pub total_votes_on_website: u64,
}
