//! Cart line item type.

use crate::ids::{DeliveryOptionId, ProductId};
use serde::{Deserialize, Serialize};

/// One product entry in the cart with its quantity and chosen delivery
/// tier.
///
/// Serialized field names follow the client storage schema
/// (`productId`/`quantity`/`deliveryOptionId`), so persisted carts stay
/// readable across client versions. The cart holds at most one line item
/// per product; [`CartStore`](crate::cart::CartStore) maintains that
/// invariant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLineItem {
    /// Product being purchased.
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    /// Quantity, at least 1.
    pub quantity: i64,
    /// Chosen delivery tier.
    #[serde(rename = "deliveryOptionId")]
    pub delivery_option_id: DeliveryOptionId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_schema_field_names() {
        let item = CartLineItem {
            product_id: ProductId::new("a"),
            quantity: 2,
            delivery_option_id: DeliveryOptionId::new("1"),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "productId": "a",
                "quantity": 2,
                "deliveryOptionId": "1",
            })
        );
    }

    #[test]
    fn test_deserializes_from_stored_schema() {
        let item: CartLineItem =
            serde_json::from_str(r#"{"productId":"b","quantity":3,"deliveryOptionId":"2"}"#)
                .unwrap();
        assert_eq!(item.product_id, ProductId::new("b"));
        assert_eq!(item.quantity, 3);
        assert_eq!(item.delivery_option_id, DeliveryOptionId::new("2"));
    }
}
