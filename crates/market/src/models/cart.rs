//! Shopping cart lines.

use rust_decimal::Decimal;

use super::Listing;

/// One selected listing in the cart.
///
/// Holds an independent copy of the listing taken at add-time: the price
/// and condition the buyer saw are frozen, and later catalog mutation
/// (such as marking the listing sold) does not reach back into the cart.
/// Quantity is effectively always 1 since each listing is unique stock.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Snapshot of the listing at add-time.
    pub listing: Listing,
    /// Number of units; fixed at 1 for unique stock.
    pub quantity: u32,
}

impl CartLine {
    /// Create a line holding a snapshot of `listing`.
    #[must_use]
    pub fn new(listing: Listing) -> Self {
        Self {
            listing,
            quantity: 1,
        }
    }

    /// Price contribution of this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.listing.price * Decimal::from(self.quantity)
    }
}
