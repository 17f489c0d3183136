mod domain;
mod messages;
mod clients;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod api_actor;
mod browser_actor;
mod order_service;
mod payment_service;
mod dom;

use anyhow::Context;
use tracing::{error, info, Instrument};
use crate::app_system::{setup_tracing, AppConfig, CheckoutSystem, DEFAULT_CONFIG_PATH};
use crate::dom::{mount_app, Document, Element, APP_ID};
use crate::domain::OrderDraft;

/// Mounts the demo page and clicks its counter `clicks` times.
fn run_counter_demo(clicks: u32) -> anyhow::Result<()> {
    let document = Document::new();
    document.body().append_child(Element::with_id("div", APP_ID));

    let button = mount_app(&document)?;
    info!(text = %button.inner_html(), "Counter mounted");
    for _ in 0..clicks {
        button.click();
    }
    info!(text = %button.inner_html(), clicks, "Counter demo finished");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::var("CHECKOUT_CONFIG") {
        Ok(path) => AppConfig::load(path)?,
        Err(_) => AppConfig::load_or_default(DEFAULT_CONFIG_PATH)?,
    };

    // Setup tracing once for the entire application
    setup_tracing(&config);

    run_counter_demo(config.counter_demo_clicks)?;

    let Some(order_path) = std::env::args().nth(1) else {
        info!("No order file given, skipping checkout");
        return Ok(());
    };

    let content = tokio::fs::read_to_string(&order_path)
        .await
        .with_context(|| format!("reading order file {}", order_path))?;
    let draft: OrderDraft = serde_json::from_str(&content)
        .with_context(|| format!("parsing order file {}", order_path))?;

    let system = CheckoutSystem::new(&config)?;

    let span = tracing::info_span!("order_processing", order_file = %order_path);
    let order_result = async {
        info!("Processing order through checkout system");
        system.order_service.process(draft).await
    }
    .instrument(span)
    .await;

    let outcome = match order_result {
        Ok(order) => {
            info!(order_id = %order.id, "Order processed successfully");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Order processing failed");
            Err(e)
        }
    };

    // Shutdown system gracefully
    system.shutdown().await.map_err(anyhow::Error::msg)?;

    outcome?;
    info!("Application completed successfully");
    Ok(())
}
