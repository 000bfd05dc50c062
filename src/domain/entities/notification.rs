use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What tapping a notification does, with the payload that action needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NotificationAction {
    ShowComment {
        comment_id: String,
        url_hash: String,
    },
    ShowReply {
        comment_id: String,
        reply_id: String,
        url_hash: String,
    },
    Announcement {
        message: String,
    },
}

/// One entry of the notification feed. Produced by the backend; this crate
/// reads and coalesces, it never rewrites identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(flatten)]
    pub action: NotificationAction,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(action: NotificationAction, created_at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            action,
            created_at,
        }
    }
}

/// A representative notification plus how many later duplicates for the same
/// target were folded into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoalescedNotification {
    pub notification: Notification,
    pub collapsed: usize,
}

/// Collapses repeat notifications for the same comment or reply down to the
/// first entry seen, keeping input order over first occurrences.
///
/// Input order is newest-ready-first, so "first seen" is the freshest entry
/// for that target. Keyed by the action's target id, not the notification id;
/// announcements and other non-targeted kinds always pass through.
pub fn coalesce(notifications: &[Notification]) -> Vec<CoalescedNotification> {
    let mut seen_comments: HashSet<&str> = HashSet::new();
    let mut seen_replies: HashSet<&str> = HashSet::new();
    let mut result: Vec<CoalescedNotification> = Vec::new();

    for notification in notifications {
        let slot = match &notification.action {
            NotificationAction::ShowComment { comment_id, .. } => {
                if seen_comments.insert(comment_id) {
                    None
                } else {
                    result.iter_mut().find(|entry| {
                        matches!(
                            &entry.notification.action,
                            NotificationAction::ShowComment { comment_id: id, .. }
                                if id == comment_id
                        )
                    })
                }
            }
            NotificationAction::ShowReply { reply_id, .. } => {
                if seen_replies.insert(reply_id) {
                    None
                } else {
                    result.iter_mut().find(|entry| {
                        matches!(
                            &entry.notification.action,
                            NotificationAction::ShowReply { reply_id: id, .. }
                                if id == reply_id
                        )
                    })
                }
            }
            NotificationAction::Announcement { .. } => None,
        };

        match slot {
            Some(representative) => representative.collapsed += 1,
            None => result.push(CoalescedNotification {
                notification: notification.clone(),
                collapsed: 0,
            }),
        }
    }

    result
}
