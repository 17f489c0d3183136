//! # Mock Framework
//!
//! Utilities for testing services in isolation.
//!
//! Use [`create_mock_api_client`] or [`create_mock_browser_client`] to get a client
//! and a receiver. Then use helpers like [`expect_get_coupon`] or [`expect_open`] to
//! assert behavior.

use tokio::sync::mpsc;
use crate::api_actor::ApiError;
use crate::browser_actor::BrowserError;
use crate::clients::{ApiClient, BrowserClient};
use crate::domain::{Coupon, Order, OrderCreate};
use crate::messages::{ApiRequest, BrowserRequest, ServiceResponse};

/// Creates a mock API client and a receiver for asserting requests.
///
/// Instead of starting an `ApiActor` (and a server for it to talk to), the test
/// owns the receiving end of the client's channel. It inspects every request as it
/// arrives and answers through the request's responder, so success, failure and
/// `null` bodies can be simulated deterministically.
pub fn create_mock_api_client(buffer_size: usize) -> (ApiClient, mpsc::Receiver<ApiRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ApiClient::new(sender), receiver)
}

/// Creates a mock browser client and a receiver for asserting navigation.
pub fn create_mock_browser_client(buffer_size: usize) -> (BrowserClient, mpsc::Receiver<BrowserRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (BrowserClient::new(sender), receiver)
}

/// Helper to verify that the next message is a GetCoupon request
pub async fn expect_get_coupon(
    receiver: &mut mpsc::Receiver<ApiRequest>,
) -> Option<(String, ServiceResponse<Option<Coupon>, ApiError>)> {
    match receiver.recv().await {
        Some(ApiRequest::GetCoupon { coupon_id, respond_to }) => Some((coupon_id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a CreateOrder request
pub async fn expect_create_order(
    receiver: &mut mpsc::Receiver<ApiRequest>,
) -> Option<(OrderCreate, ServiceResponse<Order, ApiError>)> {
    match receiver.recv().await {
        Some(ApiRequest::CreateOrder { order, respond_to }) => Some((order, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Open request
pub async fn expect_open(
    receiver: &mut mpsc::Receiver<BrowserRequest>,
) -> Option<(String, String, ServiceResponse<(), BrowserError>)> {
    match receiver.recv().await {
        Some(BrowserRequest::Open { url, target, respond_to }) => Some((url, target, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_api_client(10);

        let lookup_task = tokio::spawn(async move { client.get_coupon("123".to_string()).await });

        let (coupon_id, responder) = expect_get_coupon(&mut receiver).await.expect("Expected GetCoupon request");
        assert_eq!(coupon_id, "123");
        responder.send(Ok(Some(Coupon::new(50.0)))).unwrap();

        let result = lookup_task.await.unwrap();
        assert_eq!(result, Ok(Some(Coupon::new(50.0))));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_reported() {
        let (client, mut receiver) = create_mock_browser_client(1);

        let open_task = tokio::spawn(async move {
            client.open("https://example.com".to_string(), "_blank".to_string()).await
        });

        let (_, _, responder) = expect_open(&mut receiver).await.expect("Expected Open request");
        drop(responder);

        let result = open_task.await.unwrap();
        assert_eq!(result, Err(BrowserError::ActorCommunicationError("Actor dropped".to_string())));
    }
}
