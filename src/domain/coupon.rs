use serde::{Deserialize, Serialize};

/// Discount record resolved by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub discount: f64,
}

impl Coupon {
    /// A discount the pricing can apply: finite and not negative.
    pub fn is_usable(&self) -> bool {
        self.discount.is_finite() && self.discount >= 0.0
    }
}

#[cfg(test)]
impl Coupon {
    pub fn new(discount: f64) -> Self {
        Self { id: None, discount }
    }
}
