//! Short-lived user-facing notifications.

use std::time::Instant;

use partsbay_core::{NotificationId, NotificationKind};

/// A queued notification.
///
/// Notifications are session-scoped and never persisted; the sink removes
/// them after a fixed delay or on explicit dismissal.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Timestamp-derived id.
    pub id: NotificationId,
    /// Message shown to the user.
    pub message: String,
    /// Severity of the outcome being reported.
    pub kind: NotificationKind,
    /// When the notification was enqueued.
    pub posted_at: Instant,
}
