//! Shopping cart: the in-memory store and its durable key-value mirror.

pub mod storage;
pub mod store;

pub use storage::{FileStorage, KeyValueStore, MemoryStorage, StorageError};
pub use store::{CART_STORAGE_KEY, CartLines, CartStore};
