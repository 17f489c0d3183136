use tracing::{error, info, instrument, warn};
use crate::clients::ApiClient;
use crate::domain::{Order, OrderCreate, OrderDraft};
use crate::payment_service::PaymentService;
use super::pricing::{apply_discount, subtotal, validate_items};
use super::OrderError;

/// Orchestrates checkout: validation, coupon lookup, pricing, order
/// creation and the payment redirect.
#[derive(Clone)]
pub struct OrderService {
    api: ApiClient,
    payment: PaymentService,
}

impl OrderService {
    pub fn new(api: ApiClient, payment: PaymentService) -> Self {
        Self { api, payment }
    }

    /// Processes `draft` and returns the order created by the API once the
    /// payment link has been opened.
    #[instrument(
        skip(self, draft),
        fields(item_count = draft.items.len(), coupon_id = ?draft.coupon_id)
    )]
    pub async fn process(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        info!("Processing order");

        // Step 1: Validate items
        if let Err(e) = validate_items(&draft.items) {
            warn!(error = %e, "Order validation failed");
            return Err(e);
        }

        // Step 2: Price, applying the coupon if one was given
        let subtotal = subtotal(&draft.items);
        let total_price = match &draft.coupon_id {
            Some(coupon_id) => {
                let coupon = match self.api.get_coupon(coupon_id.clone()).await {
                    Ok(Some(coupon)) if coupon.is_usable() => coupon,
                    Ok(_) => {
                        warn!("Coupon rejected");
                        return Err(OrderError::InvalidCoupon);
                    }
                    Err(e) => {
                        error!(error = %e, "Coupon lookup failed");
                        return Err(e.into());
                    }
                };
                apply_discount(subtotal, coupon.discount)
            }
            None => subtotal,
        };
        info!(subtotal, total_price, "Order priced");

        // Step 3: Pick payment methods
        let payment_method = self.payment.build_payment_method(total_price);

        // Step 4: Create order
        let payload = OrderCreate {
            items: draft.items,
            coupon_id: draft.coupon_id,
            total_price,
            payment_method,
        };
        let order = self.api.create_order(payload).await.map_err(|e| {
            error!(error = %e, "Order submission failed");
            OrderError::from(e)
        })?;
        info!(order_id = %order.id, "Order submitted");

        // Step 5: Redirect to payment
        self.payment.pay_via_link(&order).await?;
        Ok(order)
    }
}
