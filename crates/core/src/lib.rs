//! Paradise Nursery Core - Shared types library.
//!
//! This crate provides the domain types used by the Paradise Nursery
//! components:
//! - `storefront` - Catalog, cart store, views, and the terminal host
//! - `integration-tests` - Cross-module session scenarios
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for plant IDs, prices, quantities, and the
//!   plant and cart line records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
