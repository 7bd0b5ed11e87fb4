//! Commerce error types.

use crate::ids::{DeliveryOptionId, ProductId};
use cartwheel_store::StorageError;
use thiserror::Error;

/// Errors that can occur in cart and checkout operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A line item refers to a product absent from the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A line item refers to a delivery option absent from the catalog.
    #[error("Delivery option not found: {0}")]
    DeliveryOptionNotFound(DeliveryOptionId),

    /// An operation that requires an existing line item was called for a
    /// product that is not in the cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(ProductId),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Persistence failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
