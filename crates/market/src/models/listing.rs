//! Product listings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use partsbay_core::{Category, Condition, ListingId, ListingStatus};

use super::Identity;

/// A listed part in the catalog.
///
/// `seller` is a denormalized copy of the identity taken at creation
/// time; later identity changes do not propagate into the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique, monotonically assigned id.
    pub id: ListingId,
    /// Part name, e.g. "RTX 3080 Founders Edition".
    pub name: String,
    /// Part category.
    pub category: Category,
    /// Asking price in whole rupees; non-negative.
    pub price: Decimal,
    /// Free-form seller description.
    pub description: String,
    /// Condition grade.
    pub condition: Condition,
    /// Image location: a URL or data URI.
    pub image_url: String,
    /// Snapshot of the seller at creation time.
    pub seller: Identity,
    /// Day the listing was posted.
    pub date_posted: NaiveDate,
    /// Availability; one-way from `Available` to `Sold`.
    pub status: ListingStatus,
}

/// Seller-supplied fields of a new listing.
///
/// The catalog assigns the remaining fields (id, seller snapshot, post
/// date, initial status) when the listing is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub description: String,
    pub condition: Condition,
    pub image_url: String,
}
