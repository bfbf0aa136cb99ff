//! The marketplace state stores.
//!
//! Each store owns its slice of state exclusively and exposes a narrow
//! mutation contract. Mutating operations take the notification sink as
//! an explicit argument and report their outcome through it; the
//! persisted stores write back to the local store after every mutation,
//! best-effort.

pub mod cart;
pub mod catalog;
pub mod notifications;
pub mod session;

pub use cart::CartStore;
pub use catalog::{CatalogError, CatalogStore};
pub use notifications::NotificationSink;
pub use session::SessionStore;
