//! Cart store.
//!
//! The current shopping selection. Session-scoped and never persisted:
//! a restart starts with an empty cart. Lines hold copies of the listing
//! taken at add-time (copy-on-add), so later catalog mutation does not
//! change what is already in the cart.

use rust_decimal::Decimal;

use partsbay_core::{ListingId, ListingStatus};

use crate::models::{CartLine, Listing};

use super::NotificationSink;

/// The transient shopping cart.
#[derive(Debug, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The current selection, in add order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Add a listing to the cart.
    ///
    /// A sold listing is rejected with an error. A listing already in
    /// the cart is left alone with an info notification; each listing
    /// is unique stock of one, so there is nothing to increment.
    pub fn add(&mut self, listing: &Listing, notifications: &mut NotificationSink) {
        if listing.status == ListingStatus::Sold {
            notifications.error("This item has already been sold.");
            return;
        }
        if self.lines.iter().any(|line| line.listing.id == listing.id) {
            notifications.info("This unique item is already in your cart.");
            return;
        }

        notifications.success(format!("{} added to cart!", listing.name));
        self.lines.push(CartLine::new(listing.clone()));
    }

    /// Remove the line for `id`, if present.
    ///
    /// Removing an absent line is a no-op; the info notification is
    /// emitted either way.
    pub fn remove(&mut self, id: ListingId, notifications: &mut NotificationSink) {
        self.lines.retain(|line| line.listing.id != id);
        notifications.info("Item removed from cart.");
    }

    /// Empty the cart silently. Used after checkout-equivalent flows.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of items selected. Recomputed on every call.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Total price of the selection. Recomputed on every call.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}
