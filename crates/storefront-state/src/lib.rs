//! View-state machine for the product detail page.
//!
//! This crate provides:
//! - `ApiStatus` / `FailureKind` - Fetch lifecycle status as a tagged enum
//! - `ViewEvent` - Events driving the reducer
//! - `ViewState` / `reduce` - Pure state transitions, testable without a
//!   rendering environment
//! - `Quantity` - Purchase counter with a floor of one
//! - `ViewStore` / `CancellationToken` - State ownership with a teardown
//!   guard against late fetch completions

mod event;
mod state;
mod status;
mod store;

pub use event::*;
pub use state::*;
pub use status::*;
pub use store::*;
