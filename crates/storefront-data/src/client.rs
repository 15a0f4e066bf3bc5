//! Product API client.

use spin_sdk::http::{Method, Request, Response};
use storefront_core::ApiConfig;

use crate::error::FetchError;
use crate::record::{normalize, ProductDetail, RawProductPayload};

/// Client for the upstream product catalog API.
///
/// Issues exactly one request per page view. No retry, no timeout, no
/// caching.
pub struct ProductApiClient {
    config: ApiConfig,
}

impl ProductApiClient {
    /// Create a client over the given upstream configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Fetch one product's detail payload, normalized.
    ///
    /// Sends `GET {base}/products/{id}` with `Authorization: Bearer {token}`
    /// when a token is present; without one the request still goes out
    /// unauthenticated. A 404 maps to `FetchError::NotFound`, any other
    /// error status to `FetchError::Http`.
    pub async fn fetch_product_detail(
        &self,
        product_id: &str,
        token: Option<&str>,
    ) -> Result<ProductDetail, FetchError> {
        let url = self.config.product_url(product_id);

        let mut builder = Request::builder();
        builder.method(Method::Get).uri(&url);
        if let Some(token) = token {
            builder.header("authorization", format!("Bearer {}", token));
        }

        let response: Response = spin_sdk::http::send(builder.build())
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        if let Some(err) = status_error(*response.status(), &url) {
            return Err(err);
        }

        let payload: RawProductPayload = serde_json::from_slice(response.body())
            .map_err(|e| FetchError::Deserialization(e.to_string()))?;

        Ok(normalize(payload))
    }
}

/// Classify a response status. Success is 2xx only; 404 is the explicit
/// not-found signal, and any other status is an upstream error rather than
/// something to attempt body decoding on.
fn status_error(status: u16, url: &str) -> Option<FetchError> {
    match status {
        200..=299 => None,
        404 => Some(FetchError::NotFound {
            url: url.to_string(),
        }),
        _ => Some(FetchError::Http {
            status,
            url: url.to_string(),
        }),
    }
}
