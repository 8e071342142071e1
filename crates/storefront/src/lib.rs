//! Paradise Nursery Storefront library.
//!
//! This crate provides the storefront functionality as a library, allowing it
//! to be tested and hosted by different front ends.
//!
//! # Modules
//!
//! - [`catalog`] - The fixed plant catalog
//! - [`cart`] - Cart store and its durable key-value mirror
//! - [`views`] - Pure page rendering plus HTML and text presenters
//! - [`navigation`] - The page state machine that applies user actions
//! - [`terminal`] - Interactive terminal host
//! - [`config`] - Environment configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
mod filters;
pub mod navigation;
pub mod terminal;
pub mod views;

pub use cart::{CartStore, FileStorage, KeyValueStore, MemoryStorage};
pub use catalog::Catalog;
pub use navigation::{Action, Dispatch, Notice, Storefront};
pub use views::{Page, Screen};
