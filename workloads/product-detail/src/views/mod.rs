//! View renderers keyed by fetch status.

mod failure;
mod loading;
mod success;

pub use failure::*;
pub use loading::*;
pub use success::*;

use storefront_state::{ApiStatus, FailureKind, ViewState};

/// Map the current status to its view.
///
/// Total and deterministic: every status renders exactly one view, and the
/// initial status renders nothing.
pub fn render_view(state: &ViewState) -> String {
    match state.status {
        ApiStatus::Initial => String::new(),
        ApiStatus::InProgress => render_loading(),
        ApiStatus::Success => render_product(state),
        ApiStatus::Failure(FailureKind::NotFound) => render_not_found(),
        ApiStatus::Failure(kind) => render_fetch_error(kind),
    }
}

/// HTML escape to prevent XSS.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
