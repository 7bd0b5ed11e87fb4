//! Cart, checkout, and order-tracking domain layer for Cartwheel.
//!
//! This crate is the state and computation core of a shopping-cart
//! client:
//!
//! - **Catalogs**: read-only product and delivery-option lookups
//! - **Cart**: persisted cart store with change notification
//! - **Saved items**: persisted wish-list
//! - **Checkout**: pure pricing/tax/delivery-date computation
//! - **Orders**: append-only order history and shipment tracking
//!
//! Presentation layers call into these types and re-render from their
//! outputs; nothing here renders or wires UI events.
//!
//! # Example
//!
//! ```rust,ignore
//! use cartwheel_commerce::prelude::*;
//! use cartwheel_store::Storage;
//!
//! let storage = Storage::in_memory();
//! let catalog = ProductCatalog::from_products(fetched_products);
//! let delivery_options = DeliveryOptionCatalog::standard();
//!
//! // Mutate the cart
//! let mut cart = CartStore::load(storage.clone());
//! cart.add_item(ProductId::new("prod-1"), 2)?;
//!
//! // Compute checkout totals once, render everywhere
//! let summary = checkout(cart.items(), &catalog, &delivery_options, now_ms)?;
//! println!("Total: {}", summary.total.display());
//!
//! // Commit the order and clear the cart
//! let mut ledger = OrderLedger::load(storage);
//! let order = ledger.place_order(cart.snapshot(), &summary, now_ms)?;
//! cart.clear()?;
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod delivery;
pub mod orders;
pub mod saved;
pub mod theme;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalogs
    pub use crate::catalog::{Product, ProductCatalog, ProductRating};
    pub use crate::delivery::{
        format_delivery_date, DeliveryOption, DeliveryOptionCatalog, DEFAULT_DELIVERY_OPTION_ID,
    };

    // Cart
    pub use crate::cart::{CartLineItem, CartStore, MAX_QUANTITY};

    // Saved items
    pub use crate::saved::{SavedItem, SavedItemsStore};

    // Checkout
    pub use crate::checkout::{checkout, CheckoutSummary, LineSummary, TAX_RATE_BASIS_POINTS};

    // Orders
    pub use crate::orders::{tracking_status, Order, OrderLedger, TrackingStage, TrackingStatus};

    // Theme
    pub use crate::theme::{Theme, ThemeStore};
}
