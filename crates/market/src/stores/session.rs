//! Session store.
//!
//! Owns the identity roster and the currently authenticated identity.
//! Both are persisted: the roster as a JSON array under `users`, the
//! session as the bare identity id under `currentUserId`. Startup never
//! fails: absent or unreadable data degrades to the seed roster and an
//! anonymous session.

use partsbay_core::UserId;

use crate::models::Identity;
use crate::seed;
use crate::storage::{LocalStore, keys};

use super::NotificationSink;

/// Identity roster plus the current session.
pub struct SessionStore {
    store: LocalStore,
    identities: Vec<Identity>,
    current: Option<Identity>,
}

impl SessionStore {
    /// Load the roster and session from the local store.
    ///
    /// The persisted session id is resolved against the loaded roster;
    /// an id that no longer resolves leaves the session anonymous.
    #[must_use]
    pub fn load(store: LocalStore) -> Self {
        let identities: Vec<Identity> = store.load_or(keys::USERS, seed::demo_identities);
        let stored_id: Option<i32> = store.load_or(keys::CURRENT_USER_ID, || None);
        let current = stored_id
            .map(UserId::new)
            .and_then(|id| identities.iter().find(|i| i.id == id).cloned());

        Self {
            store,
            identities,
            current,
        }
    }

    /// The full identity roster, in registration order.
    #[must_use]
    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }

    /// The authenticated identity, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Whether a session is active.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Log in.
    ///
    /// Demo semantics, preserved deliberately: the credential is NOT
    /// checked. Login succeeds iff the roster is non-empty, adopting the
    /// first roster entry as the session identity. A production rewrite
    /// would verify the credential instead.
    pub fn login(
        &mut self,
        _email: &str,
        _password: &str,
        notifications: &mut NotificationSink,
    ) -> bool {
        let Some(identity) = self.identities.first().cloned() else {
            notifications.error("Invalid credentials. Please try again.");
            return false;
        };

        tracing::info!(user = %identity.id, "session opened");
        notifications.success(format!("Welcome back, {}!", identity.name));
        self.current = Some(identity);
        self.persist_current();
        true
    }

    /// Log out. Always succeeds.
    pub fn logout(&mut self, notifications: &mut NotificationSink) {
        tracing::info!("session closed");
        self.current = None;
        self.persist_current();
        notifications.info("You have been logged out.");
    }

    /// Register a new identity and open a session for it.
    ///
    /// Fails without mutating the roster when `name` collides
    /// case-insensitively with an existing identity. New identities are
    /// unverified and receive the next id above the roster maximum.
    pub fn register(
        &mut self,
        name: &str,
        _email: &str,
        _password: &str,
        notifications: &mut NotificationSink,
    ) -> bool {
        let collides = self
            .identities
            .iter()
            .any(|i| i.name.eq_ignore_ascii_case(name));
        if collides {
            notifications.error("A user with this name already exists.");
            return false;
        }

        let next_id = self
            .identities
            .iter()
            .map(|i| i.id.as_i32())
            .max()
            .unwrap_or(0)
            + 1;
        let identity = Identity {
            id: UserId::new(next_id),
            name: name.to_string(),
            is_verified: false,
        };

        tracing::info!(user = %identity.id, name, "identity registered");
        self.identities.push(identity.clone());
        self.current = Some(identity);
        self.persist_roster();
        self.persist_current();

        notifications.success(format!(
            "Welcome to PartsBay, {name}! Your account is created."
        ));
        true
    }

    /// Write the roster back, best-effort.
    fn persist_roster(&self) {
        if let Err(err) = self.store.put(keys::USERS, &self.identities) {
            tracing::warn!(error = %err, "failed to persist identity roster");
        }
    }

    /// Write the session id back, best-effort. An anonymous session
    /// removes the key rather than storing a sentinel.
    fn persist_current(&self) {
        let result = match &self.current {
            Some(identity) => self.store.put(keys::CURRENT_USER_ID, &identity.id),
            None => self.store.remove(keys::CURRENT_USER_ID),
        };
        if let Err(err) = result {
            tracing::warn!(error = %err, "failed to persist session");
        }
    }
}
