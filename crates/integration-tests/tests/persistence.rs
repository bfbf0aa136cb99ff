//! On-disk persistence behavior.
//!
//! Opens real stores in temporary directories, mutates through the
//! engine, and reopens to check what survives a restart, and that a
//! damaged store degrades to the seed dataset instead of failing.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use partsbay_core::{Category, Condition, ListingStatus};
use partsbay_market::models::ListingDraft;
use partsbay_market::seed;
use partsbay_market::state::Market;
use partsbay_market::storage::{LocalStore, keys};
use rust_decimal::Decimal;

fn draft(name: &str) -> ListingDraft {
    ListingDraft {
        name: name.to_string(),
        category: Category::Storage,
        price: Decimal::from(18_000),
        description: "Lightly used.".to_string(),
        condition: Condition::LikeNew,
        image_url: "https://example.com/ssd.jpg".to_string(),
    }
}

fn open_market(dir: &tempfile::TempDir) -> Market {
    let store = LocalStore::open(dir.path()).unwrap();
    Market::with_store(store, None)
}

#[test]
fn test_catalog_and_session_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    let (listing_id, user_id) = {
        let mut market = open_market(&dir);
        market.register("Sajith", "s@example.com", "pw");
        market.add_listing(draft("Crucial MX500 2TB"));
        (
            market.catalog().listings()[0].id,
            market.session().current().unwrap().id,
        )
    };

    let market = open_market(&dir);
    let listing = market.catalog().find(listing_id).unwrap();
    assert_eq!(listing.name, "Crucial MX500 2TB");
    assert_eq!(market.session().current().unwrap().id, user_id);
}

#[test]
fn test_sold_status_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let listing_id = {
        let mut market = open_market(&dir);
        market.register("Dinuka", "d@example.com", "pw");
        market.add_listing(draft("WD Blue 1TB"));
        let id = market.catalog().listings()[0].id;
        market.mark_sold(id).unwrap();
        id
    };

    let market = open_market(&dir);
    assert_eq!(
        market.catalog().find(listing_id).unwrap().status,
        ListingStatus::Sold
    );
}

#[test]
fn test_cart_is_session_scoped() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut market = open_market(&dir);
        let id = market.catalog().listings()[0].id;
        market.add_to_cart(id);
        assert!(!market.cart_lines().is_empty());
    }

    let market = open_market(&dir);
    assert!(market.cart_lines().is_empty());
}

#[test]
fn test_fresh_store_yields_seed_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let market = open_market(&dir);

    assert_eq!(
        market.catalog().listings().len(),
        seed::demo_listings().len()
    );
    assert_eq!(market.session().identities(), seed::demo_identities());
    assert!(!market.session().is_authenticated());
}

#[test]
fn test_corrupt_keys_fall_back_to_seed_dataset() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = LocalStore::open(dir.path()).unwrap();
        // Valid JSON of the wrong shape for every persisted key
        store.put(keys::PRODUCTS, &"scrambled").unwrap();
        store.put(keys::USERS, &[1, 2, 3]).unwrap();
        store.put(keys::CURRENT_USER_ID, &"not-an-id").unwrap();
    }

    let market = open_market(&dir);
    assert_eq!(
        market.catalog().listings().len(),
        seed::demo_listings().len()
    );
    assert_eq!(market.session().identities(), seed::demo_identities());
    assert!(!market.session().is_authenticated());
}

#[test]
fn test_logout_clears_persisted_session() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut market = open_market(&dir);
        market.login("k@example.com", "pw");
    }
    {
        let mut market = open_market(&dir);
        assert!(market.session().is_authenticated());
        market.logout();
    }

    let market = open_market(&dir);
    assert!(!market.session().is_authenticated());
}
