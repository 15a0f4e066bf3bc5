//! Events driving the view-state reducer.

use storefront_data::ProductDetail;

use crate::status::FailureKind;

/// One input to the reducer.
///
/// Fetch events come from the data layer; quantity events come from user
/// actions and are independent of the fetch lifecycle.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// A fetch was started for this view.
    FetchStarted,
    /// The fetch resolved with a normalized payload.
    FetchSucceeded(ProductDetail),
    /// The fetch resolved with a failure.
    FetchFailed(FailureKind),
    /// User asked for one more unit.
    Increment,
    /// User asked for one unit fewer.
    Decrement,
}
