//! Failure taxonomy for product fetches.

/// Error type for fetch operations.
///
/// Every way the single product fetch can end short of success maps to one
/// variant, so the view layer can pick a dedicated rendering for each.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("product not found: {url}")]
    NotFound { url: String },

    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}
