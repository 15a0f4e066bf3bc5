//! Product detail page workload.
//!
//! Fetches one product and its similar products from the upstream catalog
//! API, drives the view-state lifecycle, and renders the view matching the
//! final status:
//! - Success: product details, quantity stepper, similar products
//! - Not found: dedicated error view with a link back to the listing
//! - Other failures: generic error view
//! - In progress: loading indicator

mod fetch;
mod shell;
mod views;

use anyhow::Result;
use spin_sdk::http::{IntoResponse, Request, Response};
use spin_sdk::http_component;

use storefront_core::{ApiConfig, RequestContext};
use storefront_data::{credential_from_cookies, ProductApiClient};
use storefront_observability::{LogFormat, LogLevel, StructuredLogger};
use storefront_state::ViewStore;

use fetch::load_product_detail;
use shell::render_page;

/// Main HTTP handler for the product detail page.
#[http_component]
async fn handle(req: Request) -> Result<impl IntoResponse> {
    let config = ApiConfig::default();

    let path = req.path().to_string();
    let mut ctx = RequestContext::new(path.as_str());
    if let Some(cookie) = req.header("cookie").and_then(|v| v.as_str()) {
        ctx = ctx.with_header("cookie", cookie);
    }

    // The router guarantees an id segment; fall back to the first product
    // if the path is bare.
    let ctx = ctx.with_param("id", extract_product_id(&path).unwrap_or("1"));
    let product_id = ctx.param("id").unwrap_or("1").to_string();

    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_workload("product-detail")
        .with_min_level(LogLevel::Debug)
        .with_format(LogFormat::Human);

    logger
        .info_builder("Product detail request started")
        .field("product_id", product_id.clone())
        .emit();

    // Credential is read once per fetch invocation; the request still goes
    // out without it.
    let token = ctx
        .header("cookie")
        .and_then(|cookies| credential_from_cookies(cookies, &config.credential_cookie));
    logger
        .debug_builder("Credential lookup")
        .field_bool("token_present", token.is_some())
        .emit();

    let client = ProductApiClient::new(config);
    let mut store = ViewStore::new();
    load_product_detail(&client, &mut store, &logger, &product_id, token.as_deref()).await;

    let state = store.state();
    logger
        .info_builder("Rendering view")
        .field("status", state.status.as_str())
        .emit();

    let html = render_page(&product_id, ctx.request_id.as_str(), state);
    logger.info("Product detail request complete");

    Ok(Response::builder()
        .status(200)
        .header("content-type", "text/html; charset=utf-8")
        .header("x-request-id", ctx.request_id.as_str())
        .body(html)
        .build())
}

/// Extract the product ID from a path like `/products/123`.
fn extract_product_id(path: &str) -> Option<&str> {
    path.strip_prefix("/products/")
        .and_then(|s| s.split('?').next())
        .and_then(|s| s.split('/').next())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_product_id() {
        assert_eq!(extract_product_id("/products/42"), Some("42"));
        assert_eq!(extract_product_id("/products/42?ref=home"), Some("42"));
        assert_eq!(extract_product_id("/products/42/reviews"), Some("42"));
    }

    #[test]
    fn test_extract_product_id_missing() {
        assert_eq!(extract_product_id("/products/"), None);
        assert_eq!(extract_product_id("/cart"), None);
    }
}
