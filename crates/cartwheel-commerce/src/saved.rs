//! The persisted saved-items (wish-list) store.

use crate::error::CommerceError;
use crate::ids::ProductId;
use cartwheel_store::Storage;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Storage key for the persisted wish-list.
pub const SAVED_ITEMS_KEY: &str = "savedItems";

/// A product saved for later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedItem {
    /// Saved product.
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    /// When the product was saved.
    #[serde(rename = "addedAtMs")]
    pub added_at_ms: i64,
}

/// Owner of the persisted wish-list.
///
/// A simpler sibling of [`CartStore`](crate::cart::CartStore): at most
/// one entry per product, no quantities, no delivery tiers, no change
/// notification.
pub struct SavedItemsStore {
    items: Vec<SavedItem>,
    storage: Storage,
}

impl SavedItemsStore {
    /// Load the wish-list from storage; absent or unreadable state
    /// degrades to empty.
    pub fn load(storage: Storage) -> Self {
        let items = match storage.get::<Vec<SavedItem>>(SAVED_ITEMS_KEY) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "discarding unreadable saved-items state");
                Vec::new()
            }
        };
        Self { items, storage }
    }

    /// Save a product. No-op if it is already saved.
    pub fn add(&mut self, product_id: ProductId, now_ms: i64) -> Result<(), CommerceError> {
        if self.contains(&product_id) {
            return Ok(());
        }
        self.items.push(SavedItem {
            product_id,
            added_at_ms: now_ms,
        });
        self.persist()
    }

    /// Remove a saved product. No-op if it is not saved.
    pub fn remove(&mut self, product_id: &ProductId) -> Result<(), CommerceError> {
        self.items.retain(|i| &i.product_id != product_id);
        self.persist()
    }

    /// Empty the wish-list.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.items.clear();
        self.persist()
    }

    /// Check whether a product is saved.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|i| &i.product_id == product_id)
    }

    /// An owned copy of the saved items, in save order.
    pub fn list(&self) -> Vec<SavedItem> {
        self.items.clone()
    }

    /// Number of saved items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the wish-list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) -> Result<(), CommerceError> {
        self.storage.set(SAVED_ITEMS_KEY, &self.items)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartwheel_store::{MemoryBackend, StorageBackend};
    use std::sync::Arc;

    const NOW_MS: i64 = 1_700_000_000_000;

    #[test]
    fn test_add_is_idempotent() {
        let mut saved = SavedItemsStore::load(Storage::in_memory());
        saved.add(ProductId::new("a"), NOW_MS).unwrap();
        saved.add(ProductId::new("a"), NOW_MS + 1).unwrap();

        assert_eq!(saved.len(), 1);
        assert_eq!(saved.list()[0].added_at_ms, NOW_MS);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut saved = SavedItemsStore::load(Storage::in_memory());
        saved.add(ProductId::new("a"), NOW_MS).unwrap();
        saved.add(ProductId::new("b"), NOW_MS).unwrap();

        saved.remove(&ProductId::new("a")).unwrap();
        assert!(!saved.contains(&ProductId::new("a")));
        assert!(saved.contains(&ProductId::new("b")));

        saved.clear().unwrap();
        assert!(saved.is_empty());
    }

    #[test]
    fn test_list_is_a_copy() {
        let mut saved = SavedItemsStore::load(Storage::in_memory());
        saved.add(ProductId::new("a"), NOW_MS).unwrap();

        let mut listed = saved.list();
        listed.clear();

        assert_eq!(saved.len(), 1);
    }

    #[test]
    fn test_persists_across_loads() {
        let storage = Storage::in_memory();

        let mut saved = SavedItemsStore::load(storage.clone());
        saved.add(ProductId::new("a"), NOW_MS).unwrap();

        let reloaded = SavedItemsStore::load(storage);
        assert!(reloaded.contains(&ProductId::new("a")));
    }

    #[test]
    fn test_corrupt_state_degrades_to_empty() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set_raw(SAVED_ITEMS_KEY, "[[[").unwrap();

        let saved = SavedItemsStore::load(Storage::new(backend));
        assert!(saved.is_empty());
    }
}
