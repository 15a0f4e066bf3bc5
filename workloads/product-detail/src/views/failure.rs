//! Failure views.

use storefront_state::FailureKind;

use super::escape_html;

/// Render the not-found view with a link back to the product listing.
pub fn render_not_found() -> String {
    r#"<div class="failure-view-container" data-section="failure">
    <img src="https://assets.ccbp.in/frontend/react-js/nxt-trendz-error-view-img.png"
        alt="failure view" class="error-img">
    <h1 class="failure-heading">Product Not Found</h1>
    <a href="/products">
        <button class="failure-btn" type="button" data-testid="failure">Continue Shopping</button>
    </a>
</div>"#
        .to_string()
}

/// Render the generic error view for non-404 failures.
pub fn render_fetch_error(kind: FailureKind) -> String {
    format!(
        r#"<div class="failure-view-container" data-section="failure">
    <h1 class="failure-heading">Something Went Wrong</h1>
    <p class="failure-reason">We could not load this product ({reason}). Please try again.</p>
    <a href="/products">
        <button class="failure-btn" type="button">Continue Shopping</button>
    </a>
</div>"#,
        reason = escape_html(&kind.to_string()),
    )
}
