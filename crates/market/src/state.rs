//! Marketplace engine: the composition root for the state stores.
//!
//! The original design kept three ambient singletons reachable from
//! anywhere in the view tree; here the stores are constructed once,
//! owned by [`Market`], and handed to consumers explicitly. The facade
//! methods mirror the store contracts so a shell only ever talks to
//! this type.

use partsbay_core::{Category, ListingId, UserId};

use crate::config::MarketConfig;
use crate::models::{CartLine, Identity, Listing, ListingDraft, Notification};
use crate::services::{DescribeClient, DescribeError};
use crate::storage::{LocalStore, StorageError};
use crate::stores::{CartStore, CatalogError, CatalogStore, NotificationSink, SessionStore};

/// The assembled marketplace state.
///
/// Single-threaded by design: every mutation runs to completion before
/// the next event is processed, so no locking is needed.
pub struct Market {
    notifications: NotificationSink,
    session: SessionStore,
    catalog: CatalogStore,
    cart: CartStore,
    describe: Option<DescribeClient>,
}

impl Market {
    /// Open the marketplace from configuration.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the local store cannot be opened.
    /// Absent or corrupt *data* inside an opened store never fails;
    /// the stores fall back to the seed dataset. A describe client
    /// that cannot be built only disables description generation.
    pub fn open(config: &MarketConfig) -> Result<Self, StorageError> {
        let store = LocalStore::open(&config.data_dir)?;
        let describe = match &config.describe {
            Some(describe_config) => match DescribeClient::new(describe_config) {
                Ok(client) => Some(client),
                Err(err) => {
                    tracing::warn!(error = %err, "description generation disabled");
                    None
                }
            },
            None => None,
        };
        Ok(Self::with_store(store, describe))
    }

    /// Assemble the marketplace over an injected store.
    ///
    /// Tests use this with [`LocalStore::temporary`].
    #[must_use]
    pub fn with_store(store: LocalStore, describe: Option<DescribeClient>) -> Self {
        let session = SessionStore::load(store.clone());
        let catalog = CatalogStore::load(store);
        Self {
            notifications: NotificationSink::new(),
            session,
            catalog,
            cart: CartStore::new(),
            describe,
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// The session store.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The catalog store.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Lines currently in the cart.
    #[must_use]
    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// The cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The notification sink, for dismissal and observation.
    pub fn notifications(&mut self) -> &mut NotificationSink {
        &mut self.notifications
    }

    /// Drain the visible notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    // =========================================================================
    // Session operations
    // =========================================================================

    /// Log in. Demo semantics; see [`SessionStore::login`].
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        self.session.login(email, password, &mut self.notifications)
    }

    /// Log out.
    pub fn logout(&mut self) {
        self.session.logout(&mut self.notifications);
    }

    /// Register a new identity and open a session for it.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> bool {
        self.session
            .register(name, email, password, &mut self.notifications)
    }

    // =========================================================================
    // Catalog operations
    // =========================================================================

    /// List a part for sale under the current identity.
    pub fn add_listing(&mut self, draft: ListingDraft) -> bool {
        self.catalog
            .add_listing(draft, self.session.current(), &mut self.notifications)
    }

    /// Update one of the current identity's listings.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogStore::update_listing`] errors.
    pub fn update_listing(&mut self, updated: Listing) -> Result<(), CatalogError> {
        self.catalog
            .update_listing(updated, self.session.current(), &mut self.notifications)
    }

    /// Mark one of the current identity's listings sold.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogStore::mark_sold`] errors.
    pub fn mark_sold(&mut self, id: ListingId) -> Result<(), CatalogError> {
        self.catalog
            .mark_sold(id, self.session.current(), &mut self.notifications)
    }

    /// Listings posted by the given seller.
    #[must_use]
    pub fn listings_by_seller(&self, seller: UserId) -> Vec<Listing> {
        self.catalog.listings_by_seller(seller)
    }

    // =========================================================================
    // Cart operations
    // =========================================================================

    /// Add the listing with the given id to the cart.
    ///
    /// The cart line is a snapshot of the listing as it stands now.
    pub fn add_to_cart(&mut self, id: ListingId) {
        let Some(listing) = self.catalog.find(id).cloned() else {
            self.notifications.error("That listing no longer exists.");
            return;
        };
        self.cart.add(&listing, &mut self.notifications);
    }

    /// Remove a listing from the cart.
    pub fn remove_from_cart(&mut self, id: ListingId) {
        self.cart.remove(id, &mut self.notifications);
    }

    /// Empty the cart silently.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // =========================================================================
    // Description generation
    // =========================================================================

    /// Whether description generation is available.
    #[must_use]
    pub const fn can_generate_descriptions(&self) -> bool {
        self.describe.is_some()
    }

    /// Draft a promotional description for a part.
    ///
    /// # Errors
    ///
    /// Returns [`DescribeError::NotConfigured`] immediately, without a
    /// network call, when no credential is configured; otherwise
    /// propagates the client's errors.
    pub async fn generate_description(
        &self,
        product_name: &str,
        category: Category,
    ) -> Result<String, DescribeError> {
        match &self.describe {
            Some(client) => client.generate_description(product_name, category).await,
            None => Err(DescribeError::NotConfigured),
        }
    }
}
