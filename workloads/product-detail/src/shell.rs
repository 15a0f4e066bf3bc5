//! Page shell: head, site header, and footer around the dispatched view.

use storefront_state::ViewState;

use crate::views::render_view;

/// Render the complete page. The shell and site header render
/// unconditionally; the body depends on the view state.
pub fn render_page(product_id: &str, request_id: &str, state: &ViewState) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Product {product_id} | Storefront</title>
<style>{styles}</style>
</head>
<body>
    <header class="site-header">
        <nav><a href="/">Home</a> / <a href="/products">Products</a> / Product {product_id}</nav>
    </header>
    <main class="product-item-details-container">
        <p class="request-info">Request ID: {request_id}</p>
{view}
    </main>
    <footer class="site-footer">
        <p>Storefront - Product Detail</p>
    </footer>
</body>
</html>"#,
        product_id = product_id,
        request_id = request_id,
        styles = PAGE_STYLES,
        view = render_view(state),
    )
}

/// CSS styles for the product detail page.
const PAGE_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 0; background: #f5f5f5; }
.site-header { background: #333; color: white; padding: 1rem 2rem; }
.site-header a { color: #88f; }
.site-footer { background: #333; color: white; padding: 2rem; text-align: center; margin-top: 2rem; }
.product-item-details-container { max-width: 1200px; margin: 0 auto; padding: 2rem; }
.request-info { font-size: 0.75rem; color: #666; }

/* Success view */
.product-detail-success-view { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; background: white; padding: 2rem; border-radius: 8px; }
.product-img { width: 100%; border-radius: 8px; }
.product-title { font-size: 2rem; margin: 0; }
.product-price { font-size: 1.5rem; font-weight: bold; color: #b12704; }
.rating-reviews-container { display: flex; gap: 1rem; align-items: center; }
.rating { background: #3b82f6; color: white; padding: 0.25rem 0.5rem; border-radius: 4px; }
.reviews { color: #666; }
.description { line-height: 1.6; }
.label-container { display: flex; gap: 0.5rem; }
.label { font-weight: bold; }
.horizontal-line { border: 1px solid #eee; }
.quantity-container { display: flex; align-items: center; gap: 1rem; }
.quantity-control-btn { background: none; border: none; font-size: 1.5rem; cursor: pointer; }
.quantity { font-size: 1.25rem; font-weight: bold; }
.cart-btn { background: #3b82f6; color: white; border: none; padding: 1rem 2rem; font-size: 1rem; border-radius: 8px; cursor: pointer; margin-top: 1rem; }

/* Similar products */
.similar-products-heading { margin-top: 2rem; }
.similar-products-container { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; list-style: none; padding: 0; }
.similar-product-item { background: white; border-radius: 8px; padding: 1rem; }
.similar-product-item a { text-decoration: none; color: inherit; }
.similar-product-img { width: 100%; border-radius: 8px; }
.similar-product-title { font-weight: bold; margin: 0.5rem 0 0 0; }
.similar-product-brand { color: #666; margin: 0.25rem 0; }
.similar-product-price-rating { display: flex; justify-content: space-between; align-items: center; }
.similar-product-rating { background: #3b82f6; color: white; padding: 0.125rem 0.375rem; border-radius: 4px; }

/* Loading view */
.products-details-loader-container { display: flex; justify-content: center; padding: 4rem; }
.loader { width: 50px; height: 50px; border: 5px solid #eee; border-top-color: #0b69ff; border-radius: 50%; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }

/* Failure views */
.failure-view-container { display: flex; flex-direction: column; align-items: center; background: white; padding: 3rem; border-radius: 8px; }
.error-img { max-width: 400px; width: 100%; }
.failure-heading { margin: 1rem 0; }
.failure-reason { color: #666; }
.failure-btn { background: #3b82f6; color: white; border: none; padding: 0.75rem 1.5rem; border-radius: 8px; cursor: pointer; }
"#;
