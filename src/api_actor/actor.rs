use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};
use crate::app_system::ApiConfig;
use crate::clients::ApiClient;
use crate::domain::{Coupon, Order, OrderCreate};
use crate::messages::{ApiRequest, ServiceResponse};
use super::ApiError;

/// Owns the HTTP client for the remote order API and serves requests one at a time.
pub struct ApiActor {
    receiver: mpsc::Receiver<ApiRequest>,
    http: reqwest::Client,
    base_url: Url,
}

impl ApiActor {
    pub fn new(config: &ApiConfig) -> Result<(Self, ApiClient), ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.base_url.clone()));
        }

        // tokio rejects a zero-capacity channel.
        let (sender, receiver) = mpsc::channel(config.buffer_size.max(1));
        let actor = Self {
            receiver,
            http: reqwest::Client::new(),
            base_url,
        };
        Ok((actor, ApiClient::new(sender)))
    }

    #[instrument(name = "api_actor", skip(self), fields(base_url = %self.base_url))]
    pub async fn run(mut self) {
        info!("ApiActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ApiRequest::GetCoupon { coupon_id, respond_to } => {
                    self.handle_get_coupon(coupon_id, respond_to).await;
                }
                ApiRequest::CreateOrder { order, respond_to } => {
                    self.handle_create_order(order, respond_to).await;
                }
            }
        }
        info!("ApiActor stopped");
    }

    #[instrument(fields(coupon_id = %coupon_id), skip(self, coupon_id, respond_to))]
    async fn handle_get_coupon(&self, coupon_id: String, respond_to: ServiceResponse<Option<Coupon>, ApiError>) {
        debug!("Processing get_coupon request");
        let result = self.fetch_coupon(&coupon_id).await;
        match &result {
            Ok(Some(coupon)) => info!(discount = %coupon.discount, "Coupon found"),
            Ok(None) => warn!("Coupon not found"),
            Err(e) => error!(error = %e, "Coupon lookup failed"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(total_price = %order.total_price, payment_method = %order.payment_method), skip(self, order, respond_to))]
    async fn handle_create_order(&self, order: OrderCreate, respond_to: ServiceResponse<Order, ApiError>) {
        debug!("Processing create_order request");
        let result = self.post_order(&order).await;
        match &result {
            Ok(created) => info!(order_id = %created.id, "Order created"),
            Err(e) => error!(error = %e, "Order creation failed"),
        }
        let _ = respond_to.send(result);
    }

    async fn fetch_coupon(&self, coupon_id: &str) -> Result<Option<Coupon>, ApiError> {
        let url = self.endpoint(&["coupons", coupon_id])?;
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        // An unknown coupon comes back either as 404 or as a `null` body.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(check_status(response, &url)?).await
    }

    async fn post_order(&self, order: &OrderCreate) -> Result<Order, ApiError> {
        let url = self.endpoint(&["order"])?;
        // `json` also sets `Content-Type: application/json`.
        let response = self
            .http
            .post(url.clone())
            .json(order)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        decode(check_status(response, &url)?).await
    }

    /// Appends path segments to the base url, encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn check_status(response: reqwest::Response, url: &Url) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
