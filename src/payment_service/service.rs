use reqwest::Url;
use tracing::{debug, info, instrument};
use crate::app_system::PaymentConfig;
use crate::clients::BrowserClient;
use crate::domain::{Order, PaymentMethod};
use super::PaymentError;

/// Chooses the payment tiers for an order and sends the user to the payment page.
#[derive(Clone)]
pub struct PaymentService {
    browser: BrowserClient,
    config: PaymentConfig,
}

impl PaymentService {
    pub fn new(browser: BrowserClient, config: PaymentConfig) -> Self {
        Self { browser, config }
    }

    /// Returns the enabled tiers for `total_price`, comma-joined.
    ///
    /// CREDIT is always offered. PAYPAY and AUPAY drop out once the total
    /// exceeds their configured maximum.
    pub fn build_payment_method(&self, total_price: f64) -> String {
        let methods: Vec<PaymentMethod> = PaymentMethod::ALL
            .into_iter()
            .filter(|method| match method {
                PaymentMethod::Credit => true,
                PaymentMethod::PayPay => total_price <= self.config.paypay_max_total,
                PaymentMethod::AuPay => total_price <= self.config.aupay_max_total,
            })
            .collect();
        let payment_method = PaymentMethod::join(&methods);
        debug!(total_price, payment_method = %payment_method, "Built payment method");
        payment_method
    }

    /// Url of the hosted payment page for `order`.
    pub fn payment_link(&self, order: &Order) -> Result<Url, PaymentError> {
        Url::parse_with_params(&self.config.link_base_url, &[("orderId", order.id.as_str())])
            .map_err(|e| PaymentError::InvalidLink(format!("{}: {}", self.config.link_base_url, e)))
    }

    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn pay_via_link(&self, order: &Order) -> Result<(), PaymentError> {
        let link = self.payment_link(order)?;
        info!(url = %link, "Redirecting to payment link");
        self.browser
            .open(link.to_string(), self.config.link_target.clone())
            .await?;
        Ok(())
    }
}
