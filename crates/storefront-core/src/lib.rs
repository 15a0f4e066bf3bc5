//! Core abstractions for the storefront platform.
//!
//! This crate provides the fundamental types shared by the data and
//! observability layers:
//! - `RequestId` - Unique request identifier for log correlation
//! - `RequestContext` - Typed request parameters and headers
//! - `ApiConfig` - Upstream product API configuration

mod config;
mod context;

pub use config::*;
pub use context::*;
