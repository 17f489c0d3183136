use tracing::debug;
use super::{setup_counter, Document, DomError, Element};

pub const APP_ID: &str = "app";
pub const COUNTER_ID: &str = "counter";
pub const APP_MARKUP: &str = concat!(
    "<div>",
    "<h1>Checkout Demo</h1>",
    "<div class=\"card\">",
    "<button id=\"counter\" type=\"button\"></button>",
    "</div>",
    "</div>",
);

/// Renders the demo page into `#app` and returns the wired counter button.
pub fn mount_app(document: &Document) -> Result<Element, DomError> {
    let app = document
        .query_selector(&format!("#{}", APP_ID))
        .ok_or_else(|| DomError::ElementNotFound(APP_ID.to_string()))?;

    app.set_inner_html(APP_MARKUP);
    let button = Element::with_id("button", COUNTER_ID);
    app.append_child(button.clone());
    setup_counter(&button);

    debug!("App mounted");
    Ok(button)
}
