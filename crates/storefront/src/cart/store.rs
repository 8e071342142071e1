//! Cart store with a durable mirror.
//!
//! The in-memory map is the source of truth. Every mutation re-serializes the
//! whole map into the storage slot; loading replaces the map wholesale.

use std::collections::BTreeMap;

use tracing::instrument;

use paradise_nursery_core::{CartLine, PlantId, Price, Quantity};

use super::storage::{KeyValueStore, StorageError};
use crate::catalog::Catalog;

/// Storage key the cart is mirrored under.
pub const CART_STORAGE_KEY: &str = "paradiseCart";

/// Why a stored cart was discarded on load.
#[derive(Debug, thiserror::Error)]
enum DecodeError {
    #[error("malformed cart payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("line keyed {key} holds plant {id}")]
    KeyMismatch { key: PlantId, id: PlantId },
}

/// Plant id to cart line, iterated in ascending id order.
pub type CartLines = BTreeMap<PlantId, CartLine>;

/// The shopper's cart plus its durable mirror.
#[derive(Debug)]
pub struct CartStore<S> {
    lines: CartLines,
    storage: S,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Load the cart from `storage`.
    ///
    /// An absent slot gives an empty cart. An unreadable slot or a payload
    /// that doesn't decode also gives an empty cart, with a warning logged.
    pub fn load(storage: S) -> Self {
        let lines = match storage.get(CART_STORAGE_KEY) {
            Ok(Some(payload)) => decode(&payload).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Discarding stored cart");
                CartLines::new()
            }),
            Ok(None) => CartLines::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored cart");
                CartLines::new()
            }
        };

        tracing::debug!(lines = lines.len(), "Cart loaded");
        Self { lines, storage }
    }

    /// Serialize the whole cart into the storage slot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the write fails.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let payload = serde_json::to_string(&self.lines)?;
        self.storage.set(CART_STORAGE_KEY, &payload)
    }

    /// Add one unit of a catalog plant.
    ///
    /// Returns the updated line, or `None` if the plant isn't in the catalog
    /// (nothing changes and nothing is saved).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if saving fails. The in-memory change is kept.
    #[instrument(skip(self, catalog))]
    pub fn add(&mut self, catalog: &Catalog, id: PlantId) -> Result<Option<&CartLine>, StorageError> {
        let Some(plant) = catalog.find(id) else {
            tracing::debug!("Ignoring add for unknown plant");
            return Ok(None);
        };

        self.lines
            .entry(id)
            .and_modify(|line| line.quantity = line.quantity.increment())
            .or_insert_with(|| CartLine::new(plant.clone()));

        self.save()?;
        Ok(self.lines.get(&id))
    }

    /// Set a line's quantity exactly.
    ///
    /// Returns `false` without saving if `quantity` is below one or the
    /// plant isn't in the cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if saving fails. The in-memory change is kept.
    #[instrument(skip(self))]
    pub fn set_quantity(&mut self, id: PlantId, quantity: u32) -> Result<bool, StorageError> {
        let Ok(quantity) = Quantity::new(quantity) else {
            tracing::debug!("Rejecting quantity below one");
            return Ok(false);
        };
        let Some(line) = self.lines.get_mut(&id) else {
            tracing::debug!("Ignoring quantity change for plant not in cart");
            return Ok(false);
        };

        line.quantity = quantity;
        self.save()?;
        Ok(true)
    }

    /// Remove a line. Removing an absent plant is not an error.
    ///
    /// Returns whether a line was removed. The cart is saved either way.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if saving fails.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: PlantId) -> Result<bool, StorageError> {
        let removed = self.lines.remove(&id).is_some();
        self.save()?;
        Ok(removed)
    }

    /// The storage backend.
    pub const fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S> CartStore<S> {
    /// Lines in ascending plant id order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// The line for a plant, if in the cart.
    #[must_use]
    pub fn get(&self, id: PlantId) -> Option<&CartLine> {
        self.lines.get(&id)
    }

    /// Number of distinct plants in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.lines
            .values()
            .fold(0, |sum, line| sum.saturating_add(line.quantity.get()))
    }

    /// Sum of unit cost times quantity across all lines.
    #[must_use]
    pub fn total_cost(&self) -> Price {
        self.lines.values().map(CartLine::line_total).sum()
    }
}

fn decode(payload: &str) -> Result<CartLines, DecodeError> {
    let lines: CartLines = serde_json::from_str(payload)?;
    if let Some((key, line)) = lines.iter().find(|(key, line)| **key != line.id()) {
        return Err(DecodeError::KeyMismatch {
            key: *key,
            id: line.id(),
        });
    }
    Ok(lines)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::storage::MemoryStorage;

    const LAVENDER: PlantId = PlantId::new(1);
    const BASIL: PlantId = PlantId::new(2);
    const UNKNOWN: PlantId = PlantId::new(42);

    fn empty_store() -> CartStore<MemoryStorage> {
        CartStore::load(MemoryStorage::new())
    }

    fn quantities<S>(store: &CartStore<S>) -> Vec<(i32, u32)> {
        store
            .lines()
            .map(|line| (line.id().as_i32(), line.quantity.get()))
            .collect()
    }

    #[test]
    fn test_add_twice_gives_quantity_two() {
        let catalog = Catalog::paradise();
        for plant in catalog.plants() {
            let mut store = empty_store();
            store.add(&catalog, plant.id).unwrap();
            let line = store.add(&catalog, plant.id).unwrap().unwrap();
            assert_eq!(line.quantity.get(), 2);
            assert_eq!(store.len(), 1);
        }
    }

    #[test]
    fn test_add_unknown_plant_is_noop() {
        let catalog = Catalog::paradise();
        let mut store = empty_store();
        assert!(store.add(&catalog, UNKNOWN).unwrap().is_none());
        assert!(store.is_empty());
        assert!(store.storage().get(CART_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_lavender_and_basil_totals() {
        let catalog = Catalog::paradise();
        let mut store = empty_store();
        store.add(&catalog, LAVENDER).unwrap();
        store.add(&catalog, LAVENDER).unwrap();
        store.add(&catalog, BASIL).unwrap();

        assert_eq!(quantities(&store), [(1, 2), (2, 1)]);
        assert_eq!(store.total_cost(), Price::new(650));
        assert_eq!(store.total_count(), 3);
    }

    #[test]
    fn test_set_quantity_below_one_is_rejected() {
        let catalog = Catalog::paradise();
        let mut store = empty_store();
        store.add(&catalog, LAVENDER).unwrap();
        let saved_before = store.storage().get(CART_STORAGE_KEY).unwrap();

        assert!(!store.set_quantity(LAVENDER, 0).unwrap());
        assert_eq!(quantities(&store), [(1, 1)]);
        assert_eq!(store.storage().get(CART_STORAGE_KEY).unwrap(), saved_before);
    }

    #[test]
    fn test_set_quantity_absent_is_rejected() {
        let mut store = empty_store();
        assert!(!store.set_quantity(BASIL, 3).unwrap());
        assert!(store.is_empty());
        assert!(store.storage().get(CART_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_set_quantity_sets_exactly() {
        let catalog = Catalog::paradise();
        let mut store = empty_store();
        store.add(&catalog, BASIL).unwrap();

        assert!(store.set_quantity(BASIL, 5).unwrap());
        assert_eq!(store.get(BASIL).unwrap().quantity.get(), 5);
        assert_eq!(store.total_cost(), Price::new(750));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let catalog = Catalog::paradise();
        let mut store = empty_store();
        store.add(&catalog, LAVENDER).unwrap();

        assert!(store.remove(LAVENDER).unwrap());
        assert!(!store.remove(LAVENDER).unwrap());
        assert!(store.is_empty());
        assert_eq!(store.total_count(), 0);
        assert_eq!(store.total_cost(), Price::ZERO);
    }

    #[test]
    fn test_totals_track_mixed_operations() {
        let catalog = Catalog::paradise();
        let mut store = empty_store();
        for id in [1, 3, 3, 5, 6, 6, 6] {
            store.add(&catalog, PlantId::new(id)).unwrap();
        }
        store.set_quantity(PlantId::new(5), 4).unwrap();
        store.set_quantity(PlantId::new(3), 0).unwrap();
        store.remove(PlantId::new(1)).unwrap();

        let expected_count: u32 = store.lines().map(|l| l.quantity.get()).sum();
        let expected_cost: u64 = store
            .lines()
            .map(|l| l.plant.cost.amount() * u64::from(l.quantity.get()))
            .sum();

        assert_eq!(store.total_count(), expected_count);
        assert_eq!(store.total_count(), 2 + 4 + 3);
        assert_eq!(store.total_cost().amount(), expected_cost);
        assert_eq!(expected_cost, 320 * 2 + 220 * 4 + 200 * 3);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let catalog = Catalog::paradise();
        let mut store = empty_store();
        store.add(&catalog, LAVENDER).unwrap();
        store.add(&catalog, PlantId::new(4)).unwrap();
        store.set_quantity(PlantId::new(4), 3).unwrap();

        let reloaded = CartStore::load(store.storage().clone());
        let summary = |s: &CartStore<MemoryStorage>| {
            s.lines()
                .map(|l| (l.id(), l.quantity, l.plant.cost, l.plant.name.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(summary(&reloaded), summary(&store));
    }

    #[test]
    fn test_saved_payload_shape() {
        let catalog = Catalog::paradise();
        let mut store = empty_store();
        store.add(&catalog, BASIL).unwrap();

        let payload = store.storage().get(CART_STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["2"]["name"], "Basil");
        assert_eq!(value["2"]["cost"], 150);
        assert_eq!(value["2"]["type"], "Aromatic");
        assert_eq!(value["2"]["quantity"], 1);
    }

    #[test]
    fn test_load_malformed_payload_gives_empty_cart() {
        for payload in ["not json", "[]", r#"{"1":{"id":1}}"#, r#"{"x":{}}"#] {
            let store = CartStore::load(MemoryStorage::with_slot(CART_STORAGE_KEY, payload));
            assert!(store.is_empty(), "payload {payload:?} should be discarded");
        }
    }

    #[test]
    fn test_load_zero_quantity_gives_empty_cart() {
        let payload = r#"{"1":{"id":1,"name":"Lavender","description":"d","img":"i","cost":250,"type":"Aromatic","quantity":0}}"#;
        let store = CartStore::load(MemoryStorage::with_slot(CART_STORAGE_KEY, payload));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_key_mismatch_gives_empty_cart() {
        let payload = r#"{"2":{"id":1,"name":"Lavender","description":"d","img":"i","cost":250,"type":"Aromatic","quantity":1}}"#;
        let store = CartStore::load(MemoryStorage::with_slot(CART_STORAGE_KEY, payload));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_keeps_snapshot_fields() {
        let payload = r#"{"1":{"id":1,"name":"Old Lavender","description":"d","img":"i","cost":199,"type":"Aromatic","quantity":2}}"#;
        let store = CartStore::load(MemoryStorage::with_slot(CART_STORAGE_KEY, payload));
        let line = store.get(LAVENDER).unwrap();
        assert_eq!(line.plant.name, "Old Lavender");
        assert_eq!(store.total_cost(), Price::new(398));
    }
}
