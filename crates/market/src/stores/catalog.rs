//! Catalog store.
//!
//! Owns every listing in the marketplace, persisted as a JSON array
//! under `products`. New listings are prepended. Startup never fails:
//! absent or unreadable data degrades to the seed catalog.

use chrono::Utc;
use thiserror::Error;

use partsbay_core::{ListingId, ListingStatus, UserId};

use crate::models::{Identity, Listing, ListingDraft};
use crate::seed;
use crate::storage::{LocalStore, keys};

use super::NotificationSink;

/// Errors from catalog mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No listing with the given id exists.
    #[error("listing {0} not found")]
    NotFound(ListingId),

    /// The caller does not own the listing it tried to update.
    #[error("listing {0} can only be updated by its seller")]
    Forbidden(ListingId),
}

/// The product catalog.
pub struct CatalogStore {
    store: LocalStore,
    listings: Vec<Listing>,
}

impl CatalogStore {
    /// Load the catalog from the local store.
    #[must_use]
    pub fn load(store: LocalStore) -> Self {
        let listings: Vec<Listing> = store.load_or(keys::PRODUCTS, seed::demo_listings);
        Self { store, listings }
    }

    /// Every listing, newest insertions first.
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Look up a listing by id.
    #[must_use]
    pub fn find(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Listings posted by the given seller, in catalog order.
    #[must_use]
    pub fn listings_by_seller(&self, seller: UserId) -> Vec<Listing> {
        self.listings
            .iter()
            .filter(|l| l.seller.id == seller)
            .cloned()
            .collect()
    }

    /// Create a listing from a draft.
    ///
    /// Requires an authenticated seller; an anonymous caller gets an
    /// error notification and no mutation. The new listing receives the
    /// next id above the catalog maximum, today's date, a snapshot of
    /// the seller, and `Available` status, and lands at the front of the
    /// catalog.
    pub fn add_listing(
        &mut self,
        draft: ListingDraft,
        seller: Option<&Identity>,
        notifications: &mut NotificationSink,
    ) -> bool {
        let Some(seller) = seller else {
            notifications.error("You must be logged in to sell an item.");
            return false;
        };

        let next_id = self
            .listings
            .iter()
            .map(|l| l.id.as_i32())
            .max()
            .unwrap_or(0)
            + 1;
        let listing = Listing {
            id: ListingId::new(next_id),
            name: draft.name,
            category: draft.category,
            price: draft.price,
            description: draft.description,
            condition: draft.condition,
            image_url: draft.image_url,
            seller: seller.clone(),
            date_posted: Utc::now().date_naive(),
            status: ListingStatus::Available,
        };

        tracing::info!(listing = %listing.id, seller = %seller.id, "listing created");
        self.listings.insert(0, listing);
        self.persist();
        notifications.success("Your product has been listed successfully!");
        true
    }

    /// Replace the stored listing with the same id.
    ///
    /// Only the listing's seller may update it; anyone else gets
    /// [`CatalogError::Forbidden`]. `Sold` is terminal; an overwrite
    /// cannot flip a sold listing back to `Available`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id and
    /// [`CatalogError::Forbidden`] when `caller` is anonymous or is not
    /// the seller.
    pub fn update_listing(
        &mut self,
        mut updated: Listing,
        caller: Option<&Identity>,
        notifications: &mut NotificationSink,
    ) -> Result<(), CatalogError> {
        let Some(existing) = self.listings.iter_mut().find(|l| l.id == updated.id) else {
            notifications.error("That listing no longer exists.");
            return Err(CatalogError::NotFound(updated.id));
        };

        let owns = caller.is_some_and(|c| c.id == existing.seller.id);
        if !owns {
            notifications.error("You can only update your own listings.");
            return Err(CatalogError::Forbidden(updated.id));
        }

        // Sold is terminal; no re-listing through an overwrite.
        if existing.status == ListingStatus::Sold {
            updated.status = ListingStatus::Sold;
        }

        tracing::debug!(listing = %updated.id, "listing updated");
        *existing = updated;
        self.persist();
        notifications.info("Product status updated.");
        Ok(())
    }

    /// Mark a listing sold.
    ///
    /// # Errors
    ///
    /// Propagates the [`update_listing`](Self::update_listing) errors.
    pub fn mark_sold(
        &mut self,
        id: ListingId,
        caller: Option<&Identity>,
        notifications: &mut NotificationSink,
    ) -> Result<(), CatalogError> {
        let Some(listing) = self.find(id).cloned() else {
            notifications.error("That listing no longer exists.");
            return Err(CatalogError::NotFound(id));
        };

        let updated = Listing {
            status: ListingStatus::Sold,
            ..listing
        };
        self.update_listing(updated, caller, notifications)
    }

    /// Write the catalog back, best-effort.
    fn persist(&self) {
        if let Err(err) = self.store.put(keys::PRODUCTS, &self.listings) {
            tracing::warn!(error = %err, "failed to persist catalog");
        }
    }
}
