//! Core types for Paradise Nursery.
//!
//! This module provides type-safe wrappers for the storefront's domain
//! concepts.

pub mod cart_line;
pub mod id;
pub mod plant;
pub mod price;
pub mod quantity;

pub use cart_line::CartLine;
pub use id::*;
pub use plant::{Plant, PlantType, PlantTypeError};
pub use price::Price;
pub use quantity::{Quantity, QuantityError};
