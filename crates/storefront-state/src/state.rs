//! View state and the pure reducer.

use std::fmt;

use storefront_data::ProductRecord;

use crate::event::ViewEvent;
use crate::status::ApiStatus;

/// Purchase quantity. Never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(u32);

impl Quantity {
    /// The floor value.
    pub const MIN: Quantity = Quantity(1);

    /// Create a quantity, clamping to the floor.
    pub fn new(value: u32) -> Self {
        Self(value.max(1))
    }

    /// Current value.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// One more unit. No upper bound.
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One unit fewer, unless already at the floor.
    pub fn decrement(self) -> Self {
        if self.0 > 1 {
            Self(self.0 - 1)
        } else {
            self
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Complete view state for one product-detail page instance.
///
/// Owned exclusively by the view instance and discarded on unmount.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Fetch lifecycle status. Exactly one holds at a time.
    pub status: ApiStatus,
    /// The fetched product. Populated whenever `status` is `Success`.
    pub product: Option<ProductRecord>,
    /// Similar products in the order the API returned them.
    pub similar_products: Vec<ProductRecord>,
    /// Selected purchase quantity.
    pub quantity: Quantity,
}

impl ViewState {
    /// State at mount: initial status, no data, quantity one.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Pure reducer mapping `(state, event)` onto the next state.
///
/// A successful fetch replaces the product data wholesale; a failed fetch
/// leaves previously held data untouched. Quantity events touch only the
/// counter.
pub fn reduce(state: ViewState, event: ViewEvent) -> ViewState {
    match event {
        ViewEvent::FetchStarted => ViewState {
            status: ApiStatus::InProgress,
            ..state
        },
        ViewEvent::FetchSucceeded(detail) => ViewState {
            status: ApiStatus::Success,
            product: Some(detail.product),
            similar_products: detail.similar_products,
            ..state
        },
        ViewEvent::FetchFailed(kind) => ViewState {
            status: ApiStatus::Failure(kind),
            ..state
        },
        ViewEvent::Increment => ViewState {
            quantity: state.quantity.increment(),
            ..state
        },
        ViewEvent::Decrement => ViewState {
            quantity: state.quantity.decrement(),
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::FailureKind;
    use storefront_data::{normalize, RawProductPayload};

    fn detail_with_similar(n: usize) -> storefront_data::ProductDetail {
        let similar: Vec<String> = (0..n)
            .map(|i| {
                format!(
                    r#"{{"id": {}, "image_url": "u{}", "title": "S{}", "price": 10.0,
                        "description": "d", "brand": "b", "total_reviews": 1,
                        "rating": 4.0, "availability": "In Stock"}}"#,
                    i + 2,
                    i,
                    i
                )
            })
            .collect();
        let body = format!(
            r#"{{"id": 1, "image_url": "u", "title": "X", "price": 100.0,
                "description": "d", "brand": "b", "total_reviews": 5,
                "rating": 4.2, "availability": "In Stock",
                "similar_products": [{}]}}"#,
            similar.join(",")
        );
        let payload: RawProductPayload = serde_json::from_str(&body).unwrap();
        normalize(payload)
    }

    #[test]
    fn test_quantity_floor() {
        let mut q = Quantity::default();
        for _ in 0..10 {
            q = q.decrement();
        }
        assert_eq!(q, Quantity::MIN);
    }

    #[test]
    fn test_increment_then_decrement_is_inverse_above_floor() {
        let q = Quantity::new(3);
        assert_eq!(q.increment().decrement(), q);
    }

    #[test]
    fn test_fetch_started_enters_in_progress() {
        let state = reduce(ViewState::new(), ViewEvent::FetchStarted);
        assert_eq!(state.status, ApiStatus::InProgress);
        assert!(state.product.is_none());
    }

    #[test]
    fn test_success_populates_product_and_similar_in_order() {
        let state = reduce(ViewState::new(), ViewEvent::FetchStarted);
        let state = reduce(state, ViewEvent::FetchSucceeded(detail_with_similar(3)));
        assert_eq!(state.status, ApiStatus::Success);
        assert_eq!(state.product.as_ref().unwrap().id, 1);
        let ids: Vec<u64> = state.similar_products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_failure_leaves_data_untouched() {
        let state = reduce(ViewState::new(), ViewEvent::FetchStarted);
        let state = reduce(state, ViewEvent::FetchFailed(FailureKind::NotFound));
        assert_eq!(state.status, ApiStatus::Failure(FailureKind::NotFound));
        assert!(state.product.is_none());
        assert!(state.similar_products.is_empty());
    }

    #[test]
    fn test_failure_after_success_keeps_prior_records() {
        let state = reduce(ViewState::new(), ViewEvent::FetchSucceeded(detail_with_similar(1)));
        let state = reduce(state, ViewEvent::FetchStarted);
        let state = reduce(state, ViewEvent::FetchFailed(FailureKind::Upstream(500)));
        assert_eq!(state.status, ApiStatus::Failure(FailureKind::Upstream(500)));
        assert_eq!(state.product.as_ref().unwrap().id, 1);
        assert_eq!(state.similar_products.len(), 1);
    }

    #[test]
    fn test_quantity_scenario() {
        // decrement at 1 holds; two increments reach 3; one decrement lands at 2
        let state = ViewState::new();
        let state = reduce(state, ViewEvent::Decrement);
        assert_eq!(state.quantity.get(), 1);
        let state = reduce(state, ViewEvent::Increment);
        let state = reduce(state, ViewEvent::Increment);
        assert_eq!(state.quantity.get(), 3);
        let state = reduce(state, ViewEvent::Decrement);
        assert_eq!(state.quantity.get(), 2);
    }

    #[test]
    fn test_quantity_survives_fetch_lifecycle() {
        let state = reduce(ViewState::new(), ViewEvent::Increment);
        let state = reduce(state, ViewEvent::FetchStarted);
        let state = reduce(state, ViewEvent::FetchSucceeded(detail_with_similar(0)));
        assert_eq!(state.quantity.get(), 2);
    }

    #[test]
    fn test_success_scenario_trace() {
        // identifier "1": success body with one similar product
        let state = reduce(ViewState::new(), ViewEvent::FetchStarted);
        let state = reduce(state, ViewEvent::FetchSucceeded(detail_with_similar(1)));
        assert_eq!(state.status, ApiStatus::Success);
        let product = state.product.as_ref().unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.title, "X");
        assert_eq!(product.price, 100.0);
        assert_eq!(state.similar_products[0].id, 2);
        assert_eq!(state.quantity.get(), 1);
    }
}
