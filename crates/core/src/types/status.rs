//! Status enums for listings and notifications.

use serde::{Deserialize, Serialize};

/// Availability of a listing.
///
/// Every listing starts `Available` and transitions one-way to `Sold`;
/// there is no re-listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ListingStatus {
    #[default]
    Available,
    Sold,
}

impl ListingStatus {
    /// Whether the listing can still be bought.
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Sold => write!(f, "Sold"),
        }
    }
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
            Self::Info => write!(f, "info"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_status_default_is_available() {
        assert_eq!(ListingStatus::default(), ListingStatus::Available);
        assert!(ListingStatus::Available.is_available());
        assert!(!ListingStatus::Sold.is_available());
    }

    #[test]
    fn test_listing_status_serde() {
        assert_eq!(
            serde_json::to_string(&ListingStatus::Sold).unwrap(),
            "\"Sold\""
        );
        let back: ListingStatus = serde_json::from_str("\"Available\"").unwrap();
        assert_eq!(back, ListingStatus::Available);
    }

    #[test]
    fn test_notification_kind_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&NotificationKind::Success).unwrap(),
            "\"success\""
        );
        let back: NotificationKind = serde_json::from_str("\"info\"").unwrap();
        assert_eq!(back, NotificationKind::Info);
    }
}
