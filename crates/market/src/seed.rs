//! Fixed demo dataset.
//!
//! Used as the fallback whenever a persisted state slice is absent or
//! unreadable at startup: the marketplace always has something to show.
//! Listing dates are pinned relative to the current day so the home view
//! stays populated.

use chrono::{NaiveDate, TimeDelta, Utc};
use rust_decimal::Decimal;

use partsbay_core::{Category, Condition, ListingId, ListingStatus, UserId};

use crate::models::{Identity, Listing};

/// The demo identity roster.
#[must_use]
pub fn demo_identities() -> Vec<Identity> {
    vec![kasun(), nimali(), ruwan()]
}

/// The demo catalog.
///
/// Six listings across categories and conditions, newest first, one
/// already sold. Sellers are snapshots of the demo roster.
#[must_use]
pub fn demo_listings() -> Vec<Listing> {
    let today = Utc::now().date_naive();

    vec![
        Listing {
            id: ListingId::new(6),
            name: "RTX 3080 Founders Edition".to_string(),
            category: Category::Gpu,
            price: Decimal::from(185_000),
            description: "Mining-free card from a personal rig. Runs cool with \
                          fresh thermal pads. Box and both power cables included."
                .to_string(),
            condition: Condition::Good,
            image_url: "https://picsum.photos/seed/rtx3080/600/400".to_string(),
            seller: kasun(),
            date_posted: days_ago(today, 1),
            status: ListingStatus::Available,
        },
        Listing {
            id: ListingId::new(5),
            name: "Ryzen 7 5800X".to_string(),
            category: Category::Cpu,
            price: Decimal::from(62_000),
            description: "Eight cores, never overclocked. Comes with the original \
                          box; no stock cooler (sold as CPU only)."
                .to_string(),
            condition: Condition::LikeNew,
            image_url: "https://picsum.photos/seed/5800x/600/400".to_string(),
            seller: nimali(),
            date_posted: days_ago(today, 2),
            status: ListingStatus::Available,
        },
        Listing {
            id: ListingId::new(4),
            name: "Corsair Vengeance 32GB (2x16) DDR4-3600".to_string(),
            category: Category::Ram,
            price: Decimal::from(28_500),
            description: "Matched kit pulled from an upgrade. XMP stable at rated \
                          speeds on both Intel and AMD boards."
                .to_string(),
            condition: Condition::LikeNew,
            image_url: "https://picsum.photos/seed/vengeance/600/400".to_string(),
            seller: kasun(),
            date_posted: days_ago(today, 4),
            status: ListingStatus::Available,
        },
        Listing {
            id: ListingId::new(3),
            name: "Samsung 970 EVO Plus 1TB NVMe".to_string(),
            category: Category::Storage,
            price: Decimal::from(24_000),
            description: "96% health reported by Samsung Magician. Great boot \
                          drive for a new build."
                .to_string(),
            condition: Condition::Used,
            image_url: "https://picsum.photos/seed/970evo/600/400".to_string(),
            seller: ruwan(),
            date_posted: days_ago(today, 6),
            status: ListingStatus::Available,
        },
        Listing {
            id: ListingId::new(2),
            name: "MSI B550 Tomahawk".to_string(),
            category: Category::Motherboard,
            price: Decimal::from(38_000),
            description: "Solid VRMs, latest BIOS flashed. Integrated I/O shield. \
                          Light use in a dust-filtered case."
                .to_string(),
            condition: Condition::Good,
            image_url: "https://picsum.photos/seed/b550/600/400".to_string(),
            seller: nimali(),
            date_posted: days_ago(today, 9),
            status: ListingStatus::Available,
        },
        Listing {
            id: ListingId::new(1),
            name: "Seasonic Focus GX-750".to_string(),
            category: Category::Psu,
            price: Decimal::from(26_000),
            description: "Fully modular 750W gold unit. All original cables in \
                          the pouch."
                .to_string(),
            condition: Condition::Used,
            image_url: "https://picsum.photos/seed/gx750/600/400".to_string(),
            seller: nimali(),
            date_posted: days_ago(today, 12),
            status: ListingStatus::Sold,
        },
    ]
}

fn kasun() -> Identity {
    Identity {
        id: UserId::new(1),
        name: "Kasun".to_string(),
        is_verified: true,
    }
}

fn nimali() -> Identity {
    Identity {
        id: UserId::new(2),
        name: "Nimali".to_string(),
        is_verified: true,
    }
}

fn ruwan() -> Identity {
    Identity {
        id: UserId::new(3),
        name: "Ruwan".to_string(),
        is_verified: false,
    }
}

fn days_ago(today: NaiveDate, days: i64) -> NaiveDate {
    today - TimeDelta::days(days)
}
