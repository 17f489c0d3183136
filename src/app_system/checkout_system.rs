use tracing::{info, error};
use crate::api_actor::{ApiActor, ApiError};
use crate::browser_actor::BrowserActor;
use crate::order_service::OrderService;
use crate::payment_service::PaymentService;
use super::AppConfig;

/// The checkout system: starts the actors and wires the services to them.
pub struct CheckoutSystem {
    pub order_service: OrderService,
    pub payment_service: PaymentService,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CheckoutSystem {
    /// Must be called from within a tokio runtime.
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        // 1. Remote API
        let (api_actor, api_client) = ApiActor::new(&config.api)?;
        let api_handle = tokio::spawn(api_actor.run());

        // 2. Browser navigation
        let (browser_actor, browser_client) = BrowserActor::new(&config.browser);
        let browser_handle = tokio::spawn(browser_actor.run());

        // 3. Services
        let payment_service = PaymentService::new(browser_client, config.payment.clone());
        let order_service = OrderService::new(api_client, payment_service.clone());

        Ok(Self {
            order_service,
            payment_service,
            handles: vec![api_handle, browser_handle],
        })
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // Actors stop once every client handle is dropped.
        drop(self.order_service);
        drop(self.payment_service);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
