use serde::{Deserialize, Serialize};

use super::vote::VoteCount;

/// Pointer to a comment somewhere on the web, as handed back by topic feed
/// retrieval. Muted-author and already-voted filtering happens in the data
/// layer before these reach the ranking helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentReference {
    pub author: String,
    pub comment_id: String,
    pub url_hash: String,
}

/// A comment reference paired with the vote snapshot the ranking helpers
/// score it by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentSnapshot {
    pub reference: CommentReference,
    pub votes: VoteCount,
    pub created_at_ms: i64,
}
