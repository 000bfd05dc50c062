use std::sync::Arc;

use crate::application::ports::notifications::NotificationFeed;
use crate::domain::entities::notification::{coalesce, CoalescedNotification};
use crate::shared::error::Result;

/// Serves the notification panel: pulls the raw feed and collapses repeat
/// entries per target before they reach the UI.
pub struct NotificationService {
    feed: Arc<dyn NotificationFeed>,
}

impl NotificationService {
    pub fn new(feed: Arc<dyn NotificationFeed>) -> Self {
        Self { feed }
    }

    pub async fn coalesced_feed(&self, user_id: &str) -> Result<Vec<CoalescedNotification>> {
        let raw = self.feed.latest(user_id).await?;
        Ok(coalesce(&raw))
    }

    /// Number of entries the panel will show after coalescing.
    pub async fn entry_count(&self, user_id: &str) -> Result<usize> {
        Ok(self.coalesced_feed(user_id).await?.len())
    }
}
