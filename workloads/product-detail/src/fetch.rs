//! Fetch lifecycle orchestration.

use storefront_data::{FetchError, ProductApiClient};
use storefront_observability::StructuredLogger;
use storefront_state::{FailureKind, ViewEvent, ViewStore};

/// Run one fetch lifecycle against the store.
///
/// The in-progress transition happens synchronously before the request is
/// issued. The completion event goes back through the store, which drops it
/// if the view was torn down while the request was in flight.
pub async fn load_product_detail(
    client: &ProductApiClient,
    store: &mut ViewStore,
    logger: &StructuredLogger,
    product_id: &str,
    token: Option<&str>,
) {
    store.dispatch(ViewEvent::FetchStarted);

    match client.fetch_product_detail(product_id, token).await {
        Ok(detail) => {
            logger
                .debug_builder("Product fetch succeeded")
                .field_i64("similar_products", detail.similar_products.len() as i64)
                .emit();
            store.dispatch(ViewEvent::FetchSucceeded(detail));
        }
        Err(err) => {
            logger
                .warn_builder("Product fetch failed")
                .field("error", err.to_string())
                .emit();
            store.dispatch(ViewEvent::FetchFailed(failure_kind(&err)));
        }
    }
}

/// Map a fetch error onto the view's failure taxonomy.
pub fn failure_kind(err: &FetchError) -> FailureKind {
    match err {
        FetchError::NotFound { .. } => FailureKind::NotFound,
        FetchError::Http { status, .. } => FailureKind::Upstream(*status),
        FetchError::Connection(_) => FailureKind::Network,
        FetchError::Deserialization(_) => FailureKind::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_not_found() {
        let err = FetchError::NotFound {
            url: "https://apis.ccbp.in/products/999".to_string(),
        };
        assert_eq!(failure_kind(&err), FailureKind::NotFound);
    }

    #[test]
    fn test_other_http_status_maps_to_upstream() {
        let err = FetchError::Http {
            status: 503,
            url: "u".to_string(),
        };
        assert_eq!(failure_kind(&err), FailureKind::Upstream(503));

        let redirect = FetchError::Http {
            status: 301,
            url: "u".to_string(),
        };
        assert_eq!(failure_kind(&redirect), FailureKind::Upstream(301));
    }

    #[test]
    fn test_transport_and_decode_failures() {
        assert_eq!(
            failure_kind(&FetchError::Connection("refused".to_string())),
            FailureKind::Network
        );
        assert_eq!(
            failure_kind(&FetchError::Deserialization("bad json".to_string())),
            FailureKind::Malformed
        );
    }
}
