//! The immutable order record.

use crate::cart::CartLineItem;
use crate::ids::{OrderId, ProductId};
use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// A completed checkout, snapshotted at placement time.
///
/// Created exactly once by the ledger and never mutated afterwards. Line
/// items are a value copy of the cart, so later catalog or cart changes
/// never alter what was recorded. Monetary fields are stored as plain
/// integer cents under the client storage schema's field names
/// (`productPriceCents`, `totalCents`, ...), keeping persisted order
/// history readable across client versions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Globally unique order identifier.
    #[serde(rename = "orderId")]
    pub id: OrderId,
    /// Placement timestamp.
    #[serde(rename = "createdAtMs")]
    pub created_at_ms: i64,
    /// Snapshot of the cart at placement time.
    #[serde(rename = "cart")]
    pub line_items: Vec<CartLineItem>,
    /// Σ product price × quantity at placement time.
    #[serde(rename = "productPriceCents")]
    pub product_price_cents: i64,
    /// Σ shipping charges at placement time.
    #[serde(rename = "shippingPriceCents")]
    pub shipping_price_cents: i64,
    /// Tax charged.
    #[serde(rename = "taxCents")]
    pub tax_cents: i64,
    /// Grand total charged.
    #[serde(rename = "totalCents")]
    pub total_cents: i64,
}

impl Order {
    /// Sum of all line item quantities.
    pub fn item_count(&self) -> i64 {
        self.line_items.iter().map(|i| i.quantity).sum()
    }

    /// Look up a line item by product id.
    pub fn find_line_item(&self, product_id: &ProductId) -> Option<&CartLineItem> {
        self.line_items.iter().find(|i| &i.product_id == product_id)
    }

    /// Placement date formatted as "August 6, 2026".
    ///
    /// Returns `None` when the timestamp is outside chrono's
    /// representable range.
    pub fn order_date(&self) -> Option<String> {
        DateTime::from_timestamp_millis(self.created_at_ms)
            .map(|d| d.format("%B %-d, %Y").to_string())
    }
}
