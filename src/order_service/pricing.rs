use crate::domain::OrderItem;
use super::OrderError;

/// Rejects an empty cart, any line with a non-positive or non-finite
/// price or a non-positive quantity, and a cart whose subtotal overflows.
pub fn validate_items(items: &[OrderItem]) -> Result<(), OrderError> {
    if items.is_empty() {
        return Err(OrderError::ItemsRequired);
    }
    let valid = items
        .iter()
        .all(|item| item.price.is_finite() && item.price > 0.0 && item.quantity > 0)
        && subtotal(items).is_finite();
    if valid {
        Ok(())
    } else {
        Err(OrderError::ItemsInvalid)
    }
}

pub fn subtotal(items: &[OrderItem]) -> f64 {
    items.iter().map(OrderItem::line_total).sum()
}

/// Total after discount, never below zero.
pub fn apply_discount(subtotal: f64, discount: f64) -> f64 {
    (subtotal - discount).max(0.0)
}
