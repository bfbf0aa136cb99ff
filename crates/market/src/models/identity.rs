//! Marketplace identity.

use serde::{Deserialize, Serialize};

use partsbay_core::UserId;

/// A registered marketplace identity.
///
/// Created by registration (unverified) or present in the seed roster.
/// Identities are never deleted in-session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Unique, monotonically assigned id.
    pub id: UserId,
    /// Display name; unique case-insensitively at registration time.
    pub name: String,
    /// Whether the marketplace has verified this seller.
    pub is_verified: bool,
}
