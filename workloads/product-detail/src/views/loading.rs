//! Loading view.

/// Render the loading indicator shown while the fetch is in flight.
pub fn render_loading() -> String {
    r#"<div class="products-details-loader-container" data-testid="loader">
    <div class="loader" role="status" aria-label="Loading"></div>
</div>"#
        .to_string()
}
