//! PartsBay Core - Shared types library.
//!
//! This crate provides common types used across all PartsBay components:
//! - `market` - The marketplace state engine and interactive shell
//! - `integration-tests` - Cross-store integration tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the domain enums
//!   (category, condition, listing status, notification kind)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
