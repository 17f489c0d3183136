use tokio::sync::mpsc;
use crate::api_actor::ApiError;
use crate::domain::{Coupon, Order, OrderCreate};
use crate::messages::ApiRequest;

/// Client for the remote order API actor.
#[derive(Clone)]
pub struct ApiClient {
    sender: mpsc::Sender<ApiRequest>,
}

impl ApiClient {
    pub fn new(sender: mpsc::Sender<ApiRequest>) -> Self {
        Self { sender }
    }
}

client_method!(ApiClient => fn get_coupon(coupon_id: String) -> Option<Coupon> as ApiRequest::GetCoupon, Error = ApiError);
client_method!(ApiClient => fn create_order(order: OrderCreate) -> Order as ApiRequest::CreateOrder, Error = ApiError);
