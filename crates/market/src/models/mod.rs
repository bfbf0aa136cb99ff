//! Domain models for the marketplace.
//!
//! Persisted models serialize with camelCase field names, matching the
//! JSON shape the store keeps on disk.

pub mod cart;
pub mod identity;
pub mod listing;
pub mod notification;

pub use cart::CartLine;
pub use identity::Identity;
pub use listing::{Listing, ListingDraft};
pub use notification::Notification;
