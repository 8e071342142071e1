//! Integration tests for Paradise Nursery.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p paradise-nursery-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart survives restarts through file storage
//! - `shopping_session` - End-to-end navigation and rendering scenarios
//!
//! Shared helpers live here so each test file can open a shop against a fresh
//! data directory and reopen it to simulate a process restart.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use paradise_nursery_storefront::{Catalog, FileStorage, Storefront};

/// A temporary data directory a shop can be opened and reopened against.
pub struct TestShop {
    dir: TempDir,
}

impl TestShop {
    /// Create an empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Directory the cart file is written under.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    /// Path of the cart slot file.
    #[must_use]
    pub fn cart_file(&self) -> PathBuf {
        self.data_dir().join("paradiseCart.json")
    }

    /// Open a shop, loading whatever cart is on disk.
    #[must_use]
    pub fn open(&self) -> Storefront<FileStorage> {
        Storefront::open(Catalog::paradise(), FileStorage::new(self.data_dir()))
    }

    /// The temporary root.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestShop {
    fn default() -> Self {
        Self::new()
    }
}
