//! Checkout pricing and delivery-date derivation.
//!
//! [`checkout`] is a pure function of the cart, the catalogs, and a
//! caller-supplied clock. Both the order-summary and payment-summary
//! views read from the single [`CheckoutSummary`] it produces, computed
//! once per user action.

use crate::cart::CartLineItem;
use crate::catalog::ProductCatalog;
use crate::delivery::DeliveryOptionCatalog;
use crate::error::CommerceError;
use crate::ids::{DeliveryOptionId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Flat tax rate applied to the subtotal, in basis points (10%).
pub const TAX_RATE_BASIS_POINTS: i64 = 1_000;

/// Pricing and delivery breakdown for one line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSummary {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Quantity.
    pub quantity: i64,
    /// Chosen delivery tier.
    pub delivery_option_id: DeliveryOptionId,
    /// Projected delivery timestamp (`now` + the tier's lead time).
    pub delivers_at_ms: i64,
    /// Unit price.
    pub unit_price: Money,
    /// Product total for this line (`unit_price` × `quantity`).
    pub line_total: Money,
    /// Shipping charge for this line, independent of quantity.
    pub shipping: Money,
}

/// Order-level price/tax/total breakdown for the current cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSummary {
    /// Sum of all quantities.
    pub item_count: i64,
    /// Σ product price × quantity.
    pub product_price: Money,
    /// Σ shipping charges, one per line item.
    pub shipping_price: Money,
    /// Product price + shipping.
    pub subtotal: Money,
    /// Flat 10% of the subtotal, rounded half up to the cent.
    pub tax: Money,
    /// Subtotal + tax.
    pub total: Money,
    /// Per-line breakdowns, in cart order.
    pub lines: Vec<LineSummary>,
}

impl CheckoutSummary {
    /// The defined zero state reported for an empty cart.
    pub fn empty() -> Self {
        let zero = Money::zero(Currency::default());
        Self {
            item_count: 0,
            product_price: zero,
            shipping_price: zero,
            subtotal: zero,
            tax: zero,
            total: zero,
            lines: Vec::new(),
        }
    }
}

/// Compute the checkout summary for a cart.
///
/// Every line item must resolve against both catalogs; a dangling
/// product or delivery-option reference fails the whole computation
/// rather than silently contributing zero to the totals. An empty cart
/// yields the all-zero summary.
pub fn checkout(
    items: &[CartLineItem],
    catalog: &ProductCatalog,
    delivery_options: &DeliveryOptionCatalog,
    now_ms: i64,
) -> Result<CheckoutSummary, CommerceError> {
    let mut summary = CheckoutSummary::empty();

    for item in items {
        let product = catalog
            .get(&item.product_id)
            .ok_or_else(|| CommerceError::ProductNotFound(item.product_id.clone()))?;
        let option = delivery_options
            .get(&item.delivery_option_id)
            .ok_or_else(|| CommerceError::DeliveryOptionNotFound(item.delivery_option_id.clone()))?;

        let line_total = product
            .price
            .try_multiply(item.quantity)
            .ok_or(CommerceError::Overflow)?;

        summary.product_price = add(summary.product_price, &line_total)?;
        summary.shipping_price = add(summary.shipping_price, &option.price)?;
        summary.item_count += item.quantity;
        summary.lines.push(LineSummary {
            product_id: item.product_id.clone(),
            quantity: item.quantity,
            delivery_option_id: item.delivery_option_id.clone(),
            delivers_at_ms: option.delivers_at_ms(now_ms),
            unit_price: product.price,
            line_total,
            shipping: option.price,
        });
    }

    summary.subtotal = add(summary.product_price, &summary.shipping_price)?;
    summary.tax = summary
        .subtotal
        .percent_bp(TAX_RATE_BASIS_POINTS)
        .ok_or(CommerceError::Overflow)?;
    summary.total = add(summary.subtotal, &summary.tax)?;

    Ok(summary)
}

/// Add two amounts, mapping the failure modes to their errors.
fn add(a: Money, b: &Money) -> Result<Money, CommerceError> {
    if a.currency != b.currency {
        return Err(CommerceError::CurrencyMismatch {
            expected: a.currency.code().to_string(),
            got: b.currency.code().to_string(),
        });
    }
    a.try_add(b).ok_or(CommerceError::Overflow)
}
