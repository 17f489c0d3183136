use thiserror::Error;
use crate::api_actor::ApiError;
use crate::payment_service::PaymentError;

/// Errors that can occur while processing an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order items are required")]
    ItemsRequired,
    #[error("Order items are invalid")]
    ItemsInvalid,
    #[error("Invalid coupon")]
    InvalidCoupon,
    #[error("Order API error: {0}")]
    Api(#[from] ApiError),
    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),
}
