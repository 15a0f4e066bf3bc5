//! Observability for storefront workloads.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with request context
//! - `LogEntry` / `LogBuilder` - Field-carrying log records

mod logging;

pub use logging::*;

// Re-export RequestId from storefront-core for convenience
pub use storefront_core::RequestId;
