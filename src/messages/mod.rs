use tokio::sync::oneshot;
use crate::domain::{Coupon, Order, OrderCreate};
use crate::api_actor::ApiError;
use crate::browser_actor::BrowserError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests served by the remote API actor. Each variant carries its
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum ApiRequest {
    GetCoupon {
        coupon_id: String,
        respond_to: ServiceResponse<Option<Coupon>, ApiError>,
    },
    CreateOrder {
        order: OrderCreate,
        respond_to: ServiceResponse<Order, ApiError>,
    },
}

/// Requests served by the browser actor.
#[derive(Debug)]
pub enum BrowserRequest {
    Open {
        url: String,
        target: String,
        respond_to: ServiceResponse<(), BrowserError>,
    },
}
