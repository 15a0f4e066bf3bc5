//! Data access layer for the product detail page.
//!
//! This crate provides:
//! - `ProductApiClient` - One authenticated fetch per page view
//! - `ProductRecord` / `ProductDetail` - Normalized catalog records
//! - `FetchError` - Failure taxonomy for the fetch lifecycle
//! - `credential_from_cookies` - Bearer token lookup by fixed cookie key

mod client;
mod credential;
mod error;
mod record;

pub use client::*;
pub use credential::*;
pub use error::*;
pub use record::*;
