//! Shipment tracking derivation.

use crate::delivery::{DeliveryOption, MS_PER_DAY};
use crate::orders::Order;
use serde::{Deserialize, Serialize};

/// The three shipment stages shown on the tracking page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackingStage {
    /// More than one day until delivery.
    Preparing,
    /// Exactly one day until delivery.
    Shipped,
    /// Delivery day reached or passed.
    Delivered,
}

impl TrackingStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingStage::Preparing => "preparing",
            TrackingStage::Shipped => "shipped",
            TrackingStage::Delivered => "delivered",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TrackingStage::Preparing => "Preparing",
            TrackingStage::Shipped => "Shipped",
            TrackingStage::Delivered => "Delivered",
        }
    }
}

/// Derived shipment state for one tracked line item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackingStatus {
    /// Current stage.
    pub stage: TrackingStage,
    /// Elapsed fraction of the delivery window, 0.0 to 1.0.
    pub progress: f64,
    /// Whole days until delivery, rounded up; non-positive once
    /// delivered.
    pub days_remaining: i64,
    /// Projected delivery timestamp.
    pub delivers_at_ms: i64,
}

/// Derive the shipment stage and progress for a tracked line item.
///
/// `delivery_option` is the tier the tracked line item references; the
/// projected delivery date is the order's placement time plus that
/// tier's lead time.
pub fn tracking_status(
    order: &Order,
    delivery_option: &DeliveryOption,
    now_ms: i64,
) -> TrackingStatus {
    let delivers_at_ms = delivery_option.delivers_at_ms(order.created_at_ms);
    // Equivalent to `i64::div_ceil`, which is still unstable. MS_PER_DAY is
    // always positive, so ceiling division is `quotient + 1` whenever the
    // truncated remainder is positive.
    let remaining_ms = delivers_at_ms - now_ms;
    let days_remaining = {
        let quotient = remaining_ms / MS_PER_DAY;
        let remainder = remaining_ms % MS_PER_DAY;
        if remainder > 0 {
            quotient + 1
        } else {
            quotient
        }
    };

    let stage = if days_remaining > 1 {
        TrackingStage::Preparing
    } else if days_remaining == 1 {
        TrackingStage::Shipped
    } else {
        TrackingStage::Delivered
    };

    // Floor the window at one day so a same-day tier doesn't divide by
    // zero.
    let total_days = delivery_option.delivery_days.max(1);
    let progressed = (total_days - days_remaining.max(0)) as f64 / total_days as f64;
    let progress = progressed.clamp(0.0, 1.0);

    TrackingStatus {
        stage,
        progress,
        days_remaining,
        delivers_at_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLineItem;
    use crate::ids::{DeliveryOptionId, OrderId, ProductId};
    use crate::money::{Currency, Money};

    const PLACED_MS: i64 = 1_700_000_000_000;

    fn order() -> Order {
        Order {
            id: OrderId::new("ORD-1700000000000-abc123"),
            created_at_ms: PLACED_MS,
            line_items: vec![CartLineItem {
                product_id: ProductId::new("a"),
                quantity: 1,
                delivery_option_id: DeliveryOptionId::new("2"),
            }],
            product_price_cents: 1000,
            shipping_price_cents: 499,
            tax_cents: 150,
            total_cents: 1649,
        }
    }

    fn three_day_option() -> DeliveryOption {
        DeliveryOption::new("2", 3, Money::new(499, Currency::USD))
    }

    #[test]
    fn test_preparing_at_placement() {
        let status = tracking_status(&order(), &three_day_option(), PLACED_MS);

        assert_eq!(status.stage, TrackingStage::Preparing);
        assert_eq!(status.days_remaining, 3);
        assert!((status.progress - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shipped_one_day_out() {
        let now = PLACED_MS + 2 * MS_PER_DAY;
        let status = tracking_status(&order(), &three_day_option(), now);

        assert_eq!(status.stage, TrackingStage::Shipped);
        assert_eq!(status.days_remaining, 1);
        assert!((status.progress - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_delivered_on_the_day() {
        let now = PLACED_MS + 3 * MS_PER_DAY;
        let status = tracking_status(&order(), &three_day_option(), now);

        assert_eq!(status.stage, TrackingStage::Delivered);
        assert_eq!(status.days_remaining, 0);
        assert!((status.progress - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_stays_clamped_after_delivery() {
        let now = PLACED_MS + 10 * MS_PER_DAY;
        let status = tracking_status(&order(), &three_day_option(), now);

        assert_eq!(status.stage, TrackingStage::Delivered);
        assert!((status.progress - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_day_rounds_up() {
        // Half a day before delivery still counts as one day remaining.
        let now = PLACED_MS + 2 * MS_PER_DAY + MS_PER_DAY / 2;
        let status = tracking_status(&order(), &three_day_option(), now);

        assert_eq!(status.days_remaining, 1);
        assert_eq!(status.stage, TrackingStage::Shipped);
    }

    #[test]
    fn test_same_day_tier_avoids_division_by_zero() {
        let option = DeliveryOption::new("instant", 0, Money::new(1999, Currency::USD));
        let status = tracking_status(&order(), &option, PLACED_MS);

        assert_eq!(status.stage, TrackingStage::Delivered);
        assert!((status.progress - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stage_strings() {
        assert_eq!(TrackingStage::Preparing.as_str(), "preparing");
        assert_eq!(TrackingStage::Shipped.display_name(), "Shipped");
    }
}
