//! Integration tests for PartsBay.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p partsbay-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `marketplace_flows` - Cross-store flows through the engine facade
//! - `persistence` - On-disk reload and fallback behavior

use partsbay_market::state::Market;
use partsbay_market::storage::LocalStore;

/// A marketplace over a fresh in-memory store.
///
/// # Panics
///
/// Panics if the in-memory store cannot be created.
#[must_use]
pub fn fresh_market() -> Market {
    let store = LocalStore::temporary().expect("in-memory store");
    Market::with_store(store, None)
}
