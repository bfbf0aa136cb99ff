//! Notification sink.
//!
//! An ordered queue of short-lived messages reporting store-mutation
//! outcomes. Entries expire after a fixed delay or on explicit
//! dismissal, whichever comes first; expired entries are pruned whenever
//! the queue is observed.

use std::time::{Duration, Instant};

use partsbay_core::{NotificationId, NotificationKind};

use crate::models::Notification;

/// How long a notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(4000);

/// Ordered queue of short-lived user-facing messages.
#[derive(Debug)]
pub struct NotificationSink {
    entries: Vec<Notification>,
    ttl: Duration,
    last_id: i64,
}

impl NotificationSink {
    /// Create a sink with the standard 4-second TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(NOTIFICATION_TTL)
    }

    /// Create a sink with a custom TTL.
    ///
    /// Tests use short TTLs to exercise expiry without sleeping.
    #[must_use]
    pub const fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Vec::new(),
            ttl,
            last_id: 0,
        }
    }

    /// Enqueue a notification and return its id.
    ///
    /// The id is derived from the current timestamp in milliseconds and
    /// bumped when two pushes land in the same millisecond, so ids stay
    /// unique and dismissal always targets a single entry.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let mut id = chrono::Utc::now().timestamp_millis();
        if id <= self.last_id {
            id = self.last_id + 1;
        }
        self.last_id = id;

        let notification = Notification {
            id: NotificationId::new(id),
            message: message.into(),
            kind,
            posted_at: Instant::now(),
        };
        tracing::debug!(id, kind = %kind, "notification enqueued");
        self.entries.push(notification);
        NotificationId::new(id)
    }

    /// Enqueue a success notification.
    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(message, NotificationKind::Success)
    }

    /// Enqueue an error notification.
    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(message, NotificationKind::Error)
    }

    /// Enqueue an info notification.
    pub fn info(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(message, NotificationKind::Info)
    }

    /// Dismiss the notification with the given id, if still queued.
    pub fn dismiss(&mut self, id: NotificationId) {
        self.entries.retain(|n| n.id != id);
    }

    /// The currently visible notifications, oldest first.
    ///
    /// Prunes expired entries before returning, so a notification
    /// enqueued at time T is gone once T + TTL has passed.
    pub fn active(&mut self) -> &[Notification] {
        let ttl = self.ttl;
        let now = Instant::now();
        self.entries
            .retain(|n| now.saturating_duration_since(n.posted_at) < ttl);
        &self.entries
    }

    /// Drain every visible notification, oldest first.
    ///
    /// Used by shells that render notifications once rather than keeping
    /// them on screen.
    pub fn drain(&mut self) -> Vec<Notification> {
        let _ = self.active();
        std::mem::take(&mut self.entries)
    }
}

impl Default for NotificationSink {
    fn default() -> Self {
        Self::new()
    }
}
