//! The append-only order ledger.

use crate::cart::CartLineItem;
use crate::checkout::CheckoutSummary;
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::orders::Order;
use cartwheel_store::Storage;
use tracing::{debug, warn};

/// Storage key for the persisted order history.
pub const ORDERS_KEY: &str = "orders";

/// Owner of the persisted order history, most-recent-first.
///
/// [`OrderLedger::place_order`] is the sole mutation entry point; orders
/// are never edited or removed once recorded.
pub struct OrderLedger {
    orders: Vec<Order>,
    storage: Storage,
}

impl OrderLedger {
    /// Load the order history from storage; absent or unreadable state
    /// degrades to an empty history.
    pub fn load(storage: Storage) -> Self {
        let orders = match storage.get::<Vec<Order>>(ORDERS_KEY) {
            Ok(Some(orders)) => orders,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "discarding unreadable order history");
                Vec::new()
            }
        };
        Self { orders, storage }
    }

    /// Commit a checkout into a new immutable order.
    ///
    /// Takes the cart snapshot and the totals already computed for it,
    /// stamps the order with `now_ms` and a fresh collision-resistant id,
    /// prepends it to the history, and persists. Returns the new order.
    /// Clearing the live cart afterwards is the caller's move and does
    /// not affect the recorded snapshot.
    pub fn place_order(
        &mut self,
        line_items: Vec<CartLineItem>,
        summary: &CheckoutSummary,
        now_ms: i64,
    ) -> Result<Order, CommerceError> {
        let order = Order {
            id: OrderId::place(now_ms),
            created_at_ms: now_ms,
            line_items,
            product_price_cents: summary.product_price.amount_cents,
            shipping_price_cents: summary.shipping_price.amount_cents,
            tax_cents: summary.tax.amount_cents,
            total_cents: summary.total.amount_cents,
        };

        self.orders.insert(0, order.clone());
        self.storage.set(ORDERS_KEY, &self.orders)?;
        debug!(order_id = %order.id, total_cents = order.total_cents, "order placed");

        Ok(order)
    }

    /// Look up an order by id.
    pub fn find_order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Look up a line item within an order.
    pub fn find_line_item(
        &self,
        order_id: &OrderId,
        product_id: &ProductId,
    ) -> Option<&CartLineItem> {
        self.find_order(order_id)?.find_line_item(product_id)
    }

    /// All orders, most recent first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Number of recorded orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
