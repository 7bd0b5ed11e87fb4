//! The persisted cart store.

use crate::cart::CartLineItem;
use crate::delivery::DEFAULT_DELIVERY_OPTION_ID;
use crate::error::CommerceError;
use crate::ids::{DeliveryOptionId, ProductId};
use cartwheel_store::Storage;
use tracing::warn;

/// Storage key for the persisted cart.
pub const CART_KEY: &str = "cart";

/// Upper quantity bound callers are expected to validate against before
/// calling [`CartStore::set_quantity`]. The store itself does not reject
/// out-of-range values.
pub const MAX_QUANTITY: i64 = 999;

/// Same-process observer of cart changes.
type CartListener = Box<dyn Fn(&[CartLineItem])>;

/// Owner of the mutable cart and its persistence.
///
/// Every mutating operation writes the full cart to storage and then
/// notifies registered listeners with the current snapshot, so observers
/// can re-render without re-reading storage. Cross-process (tab)
/// synchronization is the storage backend's concern: the most recent
/// persisted write wins, and external observers re-read on an
/// external-change notification.
pub struct CartStore {
    items: Vec<CartLineItem>,
    storage: Storage,
    listeners: Vec<CartListener>,
}

impl CartStore {
    /// Load the cart from storage.
    ///
    /// Absent or unreadable persisted state degrades to an empty cart:
    /// local state the user can rebuild by re-shopping is not worth
    /// failing startup over.
    pub fn load(storage: Storage) -> Self {
        let items = match storage.get::<Vec<CartLineItem>>(CART_KEY) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "discarding unreadable cart state");
                Vec::new()
            }
        };
        Self {
            items,
            storage,
            listeners: Vec::new(),
        }
    }

    /// Register a same-process observer, called with the cart snapshot
    /// after every mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&[CartLineItem]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Add `quantity` of a product to the cart.
    ///
    /// Quantities below 1 are clamped to 1. If the product already has a
    /// line item its quantity is increased; otherwise a new line item is
    /// appended with the default delivery option.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        let add_qty = quantity.max(1);

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            existing.quantity = existing.quantity.saturating_add(add_qty);
        } else {
            self.items.push(CartLineItem {
                product_id,
                quantity: add_qty,
                delivery_option_id: DeliveryOptionId::new(DEFAULT_DELIVERY_OPTION_ID),
            });
        }

        self.commit()
    }

    /// Remove a product's line item. No-op if the product is not in the
    /// cart.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<(), CommerceError> {
        self.items.retain(|i| &i.product_id != product_id);
        self.commit()
    }

    /// Overwrite the quantity of a product's line item. No-op if the
    /// product is not in the cart.
    ///
    /// Callers are responsible for validating `new_quantity` against
    /// `1..=`[`MAX_QUANTITY`] first; the store applies whatever it is
    /// given.
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        new_quantity: i64,
    ) -> Result<(), CommerceError> {
        if let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            item.quantity = new_quantity;
        }
        self.commit()
    }

    /// Overwrite the delivery option of a product's line item.
    ///
    /// Unlike the other mutations this one requires the line item to
    /// exist, and returns [`CommerceError::ItemNotInCart`] when it does
    /// not.
    pub fn set_delivery_option(
        &mut self,
        product_id: &ProductId,
        delivery_option_id: DeliveryOptionId,
    ) -> Result<(), CommerceError> {
        let item = self
            .items
            .iter_mut()
            .find(|i| &i.product_id == product_id)
            .ok_or_else(|| CommerceError::ItemNotInCart(product_id.clone()))?;
        item.delivery_option_id = delivery_option_id;
        self.commit()
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.items.clear();
        self.commit()
    }

    /// Sum of all line item quantities; 0 for an empty cart.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current line items, in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// An owned copy of the current line items, e.g. for placing an
    /// order.
    pub fn snapshot(&self) -> Vec<CartLineItem> {
        self.items.clone()
    }

    /// Persist the full cart and notify listeners.
    fn commit(&mut self) -> Result<(), CommerceError> {
        self.storage.set(CART_KEY, &self.items)?;
        for listener in &self.listeners {
            listener(&self.items);
        }
        Ok(())
    }
}
