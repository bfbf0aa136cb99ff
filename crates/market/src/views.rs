//! View derivation over catalog snapshots.
//!
//! Pure, read-only queries: filtering, sorting, and the home-page
//! "latest listings" view. Every call computes a fresh result from the
//! snapshot it is handed; nothing here mutates or caches.

use rust_decimal::Decimal;

use partsbay_core::{Category, Condition};

use crate::models::Listing;

/// Number of listings shown on the home page.
pub const HOME_PAGE_LISTINGS: usize = 4;

/// Sort order for browse results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Descending post date; ties keep their original relative order.
    #[default]
    Newest,
    /// Ascending price.
    PriceAsc,
    /// Descending price.
    PriceDesc,
}

/// Filter and sort configuration for a browse query.
///
/// All filters are conjunctive; an unset option means "no restriction".
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    /// Case-insensitive substring match on the listing name.
    pub search_text: String,
    /// Restrict to one category.
    pub category: Option<Category>,
    /// Restrict to one condition grade.
    pub condition: Option<Condition>,
    /// Keep listings priced at or below this cap.
    pub max_price: Option<Decimal>,
    /// Whether sold listings appear in the results.
    pub include_sold: bool,
    /// Result ordering.
    pub sort: SortKey,
}

/// Filter and sort a catalog snapshot.
///
/// Returns a freshly computed sequence; the input is never mutated.
#[must_use]
pub fn filter_listings(listings: &[Listing], query: &ListingQuery) -> Vec<Listing> {
    let search = query.search_text.to_lowercase();

    let mut results: Vec<Listing> = listings
        .iter()
        .filter(|l| query.include_sold || l.status.is_available())
        .filter(|l| search.is_empty() || l.name.to_lowercase().contains(&search))
        .filter(|l| query.category.is_none_or(|c| l.category == c))
        .filter(|l| query.condition.is_none_or(|c| l.condition == c))
        .filter(|l| query.max_price.is_none_or(|cap| l.price <= cap))
        .cloned()
        .collect();

    match query.sort {
        SortKey::Newest => results.sort_by(|a, b| b.date_posted.cmp(&a.date_posted)),
        SortKey::PriceAsc => results.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => results.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    results
}

/// The home-page view: newest available listings, truncated to
/// [`HOME_PAGE_LISTINGS`].
#[must_use]
pub fn latest_listings(listings: &[Listing]) -> Vec<Listing> {
    let mut results = filter_listings(listings, &ListingQuery::default());
    results.truncate(HOME_PAGE_LISTINGS);
    results
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::NaiveDate;
    use partsbay_core::{ListingId, ListingStatus, UserId};

    use crate::models::Identity;

    use super::*;

    fn listing(id: i32, name: &str, price: i64, day: u32) -> Listing {
        Listing {
            id: ListingId::new(id),
            name: name.to_string(),
            category: Category::Other,
            price: Decimal::from(price),
            description: String::new(),
            condition: Condition::Used,
            image_url: String::new(),
            seller: Identity {
                id: UserId::new(1),
                name: "Kasun".to_string(),
                is_verified: true,
            },
            date_posted: NaiveDate::from_ymd_opt(2026, 7, day).unwrap(),
            status: ListingStatus::Available,
        }
    }

    fn catalog() -> Vec<Listing> {
        let mut listings = vec![
            listing(1, "RTX 3080", 185_000, 20),
            listing(2, "RTX 3060 Ti", 95_000, 22),
            listing(3, "Ryzen 7 5800X", 62_000, 25),
            listing(4, "B550 Tomahawk", 38_000, 18),
        ];
        listings[0].category = Category::Gpu;
        listings[1].category = Category::Gpu;
        listings[1].condition = Condition::LikeNew;
        listings[2].category = Category::Cpu;
        listings[3].category = Category::Motherboard;
        listings[3].status = ListingStatus::Sold;
        listings
    }

    #[test]
    fn test_default_query_excludes_sold() {
        let results = filter_listings(&catalog(), &ListingQuery::default());
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|l| l.status.is_available()));
    }

    #[test]
    fn test_include_sold() {
        let query = ListingQuery {
            include_sold: true,
            ..ListingQuery::default()
        };
        assert_eq!(filter_listings(&catalog(), &query).len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let query = ListingQuery {
            search_text: "rtx".to_string(),
            ..ListingQuery::default()
        };
        let results = filter_listings(&catalog(), &query);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|l| l.name.contains("RTX")));
    }

    #[test]
    fn test_category_and_condition_filters() {
        let query = ListingQuery {
            category: Some(Category::Gpu),
            condition: Some(Condition::LikeNew),
            ..ListingQuery::default()
        };
        let results = filter_listings(&catalog(), &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "RTX 3060 Ti");
    }

    #[test]
    fn test_filters_are_conjunctive() {
        // maxPrice 200_000 keeps the available 100-priced listing and the
        // sold 300-priced one only when includeSold is set
        let mut a = listing(10, "A", 100, 1);
        let mut b = listing(11, "B", 300, 2);
        a.status = ListingStatus::Available;
        b.status = ListingStatus::Sold;
        let listings = vec![a, b];

        let query = ListingQuery {
            max_price: Some(Decimal::from(200)),
            include_sold: false,
            ..ListingQuery::default()
        };
        let results = filter_listings(&listings, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "A");

        // Each predicate alone admits more
        let price_only = ListingQuery {
            max_price: Some(Decimal::from(400)),
            include_sold: true,
            ..ListingQuery::default()
        };
        assert_eq!(filter_listings(&listings, &price_only).len(), 2);
    }

    #[test]
    fn test_max_price_is_inclusive() {
        let query = ListingQuery {
            max_price: Some(Decimal::from(62_000)),
            ..ListingQuery::default()
        };
        let results = filter_listings(&catalog(), &query);
        assert!(results.iter().any(|l| l.price == Decimal::from(62_000)));
    }

    #[test]
    fn test_sort_newest_descending_with_stable_ties() {
        let mut listings = catalog();
        // Two listings share a date; their relative order must survive
        listings.push(listing(5, "Tie One", 1_000, 25));
        listings.push(listing(6, "Tie Two", 2_000, 25));

        let results = filter_listings(&listings, &ListingQuery::default());
        assert_eq!(results[0].name, "Ryzen 7 5800X");
        let tie_one = results.iter().position(|l| l.name == "Tie One").unwrap();
        let tie_two = results.iter().position(|l| l.name == "Tie Two").unwrap();
        assert!(tie_one < tie_two);
    }

    #[test]
    fn test_sort_by_price() {
        let asc = ListingQuery {
            sort: SortKey::PriceAsc,
            ..ListingQuery::default()
        };
        let results = filter_listings(&catalog(), &asc);
        let prices: Vec<_> = results.iter().map(|l| l.price).collect();
        let mut sorted = prices.clone();
        sorted.sort_unstable();
        assert_eq!(prices, sorted);

        let desc = ListingQuery {
            sort: SortKey::PriceDesc,
            ..ListingQuery::default()
        };
        let results = filter_listings(&catalog(), &desc);
        let prices: Vec<_> = results.iter().map(|l| l.price).collect();
        let mut sorted = prices.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(prices, sorted);
    }

    #[test]
    fn test_filtering_never_mutates_input() {
        let listings = catalog();
        let before = listings.clone();
        let _ = filter_listings(&listings, &ListingQuery::default());
        assert_eq!(listings, before);
    }

    #[test]
    fn test_latest_listings_truncates_and_excludes_sold() {
        let mut listings = catalog();
        listings.push(listing(7, "Extra One", 1_000, 10));
        listings.push(listing(8, "Extra Two", 1_000, 11));

        let latest = latest_listings(&listings);
        assert_eq!(latest.len(), HOME_PAGE_LISTINGS);
        assert!(latest.iter().all(|l| l.status.is_available()));
        // Newest available first
        assert_eq!(latest[0].name, "Ryzen 7 5800X");
    }
}
