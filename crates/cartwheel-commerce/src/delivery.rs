//! Delivery option types.

use crate::ids::DeliveryOptionId;
use crate::money::{Currency, Money};
use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Delivery option assigned to a line item when none is chosen.
pub const DEFAULT_DELIVERY_OPTION_ID: &str = "1";

/// A shipping tier with a lead time and a flat price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryOption {
    /// Unique identifier.
    pub id: DeliveryOptionId,
    /// Lead time in days.
    pub delivery_days: i64,
    /// Flat shipping price, charged once per line item.
    pub price: Money,
}

impl DeliveryOption {
    /// Create a new delivery option.
    pub fn new(id: impl Into<DeliveryOptionId>, delivery_days: i64, price: Money) -> Self {
        Self {
            id: id.into(),
            delivery_days,
            price,
        }
    }

    /// Check if this is free shipping.
    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }

    /// Projected delivery timestamp for an order entering shipping now.
    pub fn delivers_at_ms(&self, now_ms: i64) -> i64 {
        now_ms + self.delivery_days * MS_PER_DAY
    }
}

/// Format a delivery timestamp as "Tuesday, June 21".
///
/// Returns `None` when the timestamp is outside chrono's representable
/// range.
pub fn format_delivery_date(at_ms: i64) -> Option<String> {
    DateTime::from_timestamp_millis(at_ms).map(|d| d.format("%A, %B %-d").to_string())
}

/// The static set of shipping tiers.
///
/// Loaded once and read-only thereafter.
#[derive(Debug, Clone)]
pub struct DeliveryOptionCatalog {
    options: Vec<DeliveryOption>,
}

impl DeliveryOptionCatalog {
    /// The standard three tiers: free 7-day, $4.99 3-day, $9.99 1-day.
    pub fn standard() -> Self {
        Self::from_options(vec![
            DeliveryOption::new("1", 7, Money::zero(Currency::USD)),
            DeliveryOption::new("2", 3, Money::new(499, Currency::USD)),
            DeliveryOption::new("3", 1, Money::new(999, Currency::USD)),
        ])
    }

    /// Build a catalog from an explicit tier list.
    pub fn from_options(options: Vec<DeliveryOption>) -> Self {
        Self { options }
    }

    /// Look up a delivery option by id.
    pub fn get(&self, id: &DeliveryOptionId) -> Option<&DeliveryOption> {
        self.options.iter().find(|o| &o.id == id)
    }

    /// All options, in catalog order.
    pub fn list(&self) -> &[DeliveryOption] {
        &self.options
    }
}

impl Default for DeliveryOptionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tiers() {
        let catalog = DeliveryOptionCatalog::standard();

        let free = catalog.get(&DeliveryOptionId::new("1")).unwrap();
        assert_eq!(free.delivery_days, 7);
        assert!(free.is_free());

        let express = catalog.get(&DeliveryOptionId::new("3")).unwrap();
        assert_eq!(express.delivery_days, 1);
        assert_eq!(express.price.amount_cents, 999);

        assert!(catalog.get(&DeliveryOptionId::new("4")).is_none());
    }

    #[test]
    fn test_delivers_at() {
        let option = DeliveryOption::new("2", 3, Money::new(499, Currency::USD));
        assert_eq!(option.delivers_at_ms(1_000), 1_000 + 3 * MS_PER_DAY);
    }

    #[test]
    fn test_format_delivery_date() {
        // 2026-08-10 00:00:00 UTC is a Monday
        let formatted = format_delivery_date(1_786_320_000_000).unwrap();
        assert_eq!(formatted, "Monday, August 10");
    }
}
