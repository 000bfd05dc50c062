use async_trait::async_trait;

use crate::domain::entities::Notification;
use crate::shared::error::Result;

/// Raw notification feed from the backend, newest/most-relevant first.
#[async_trait]
pub trait NotificationFeed: Send + Sync {
    async fn latest(&self, user_id: &str) -> Result<Vec<Notification>>;
}
