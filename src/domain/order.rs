use serde::{Deserialize, Serialize};

/// A single cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub product_id: String,
    pub price: f64,
    /// Signed so that a negative quantity reaches validation instead of
    /// failing deserialization.
    pub quantity: i64,
}

impl OrderItem {
    /// Price times quantity for this line.
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[cfg(test)]
impl OrderItem {
    pub fn new(
        id: impl Into<String>,
        product_id: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            price,
            quantity,
        }
    }
}

/// Order as submitted by the caller, before pricing.
///
/// A missing `items` field deserializes to an empty list so that it is
/// rejected by the same validation as an explicitly empty cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<String>,
}

#[cfg(test)]
impl OrderDraft {
    pub fn new(items: Vec<OrderItem>) -> Self {
        Self {
            items,
            coupon_id: None,
        }
    }

    pub fn with_coupon(mut self, coupon_id: impl Into<String>) -> Self {
        self.coupon_id = Some(coupon_id.into());
        self
    }
}

/// Payload for creating an order on the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<String>,
    pub total_price: f64,
    pub payment_method: String,
}

/// An order persisted by the remote API.
///
/// Only `id` is guaranteed to be present in the server response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<String>,
}

#[cfg(test)]
impl Order {
    /// An order known only by its server-assigned id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_create_omits_missing_coupon() {
        let payload = OrderCreate {
            items: vec![OrderItem::new("1", "product 1", 100.0, 1)],
            coupon_id: None,
            total_price: 100.0,
            payment_method: "CREDIT".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "items": [{ "id": "1", "productId": "product 1", "price": 100.0, "quantity": 1 }],
                "totalPrice": 100.0,
                "paymentMethod": "CREDIT"
            })
        );
    }

    #[test]
    fn draft_without_items_is_empty() {
        let draft: OrderDraft = serde_json::from_value(json!({ "couponId": "123" })).unwrap();
        assert!(draft.items.is_empty());
        assert_eq!(draft.coupon_id.as_deref(), Some("123"));
    }

    #[test]
    fn server_order_needs_only_an_id() {
        let order: Order = serde_json::from_value(json!({ "id": "order123" })).unwrap();
        assert_eq!(order, Order::with_id("order123"));
    }

    #[test]
    fn negative_quantity_deserializes() {
        let draft: OrderDraft = serde_json::from_value(json!({
            "items": [{ "id": "1", "productId": "p", "price": 10, "quantity": -1 }]
        }))
        .unwrap();
        assert_eq!(draft.items[0].quantity, -1);
    }

    #[test]
    fn line_total_multiplies_price_and_quantity() {
        assert_eq!(OrderItem::new("1", "p", 12.5, 4).line_total(), 50.0);
    }
}
