//! Success view: product details, quantity stepper, similar products.

use storefront_data::ProductRecord;
use storefront_state::ViewState;

use super::escape_html;

/// Render the success view for a populated state.
pub fn render_product(state: &ViewState) -> String {
    // Success status implies a populated product; an empty one renders
    // nothing rather than panicking.
    let Some(product) = state.product.as_ref() else {
        return String::new();
    };

    let similar_items: String = state
        .similar_products
        .iter()
        .map(render_similar_product)
        .collect();

    format!(
        r#"<div class="product-detail-success-view" data-section="product">
    <div class="product-img-container">
        <img src="{image_url}" alt="product" class="product-img">
    </div>
    <div class="product-item-details">
        <h1 class="product-title">{title}</h1>
        <p class="product-price">Rs {price}/-</p>
        <div class="rating-reviews-container">
            <p class="rating">{rating} &#9733;</p>
            <p class="reviews">{total_reviews} Reviews</p>
        </div>
        <p class="description">{description}</p>
        <div class="label-container">
            <p class="label">Available:</p>
            <p class="value">{availability}</p>
        </div>
        <div class="label-container">
            <p class="label">Brand:</p>
            <p class="value">{brand}</p>
        </div>
        <hr class="horizontal-line">
        <div class="quantity-container">
            <button class="quantity-control-btn" type="button" data-testid="minus"
                aria-label="Decrease quantity">&#8863;</button>
            <p class="quantity">{quantity}</p>
            <button class="quantity-control-btn" type="button" data-testid="plus"
                aria-label="Increase quantity">&#8862;</button>
        </div>
        <button class="cart-btn" type="button">ADD TO CART</button>
    </div>
</div>
<h1 class="similar-products-heading">Similar Products</h1>
<ul class="similar-products-container">{similar_items}</ul>"#,
        image_url = escape_html(&product.image_url),
        title = escape_html(&product.title),
        price = format_price(product.price),
        rating = product.rating,
        total_reviews = product.total_reviews,
        description = escape_html(&product.description),
        availability = escape_html(&product.availability),
        brand = escape_html(&product.brand),
        quantity = state.quantity,
    )
}

/// Render one similar-product list item with its stable key.
fn render_similar_product(record: &ProductRecord) -> String {
    format!(
        r#"<li class="similar-product-item" data-product-id="{id}">
    <a href="/products/{id}">
        <img src="{image_url}" alt="similar product" class="similar-product-img">
        <p class="similar-product-title">{title}</p>
        <p class="similar-product-brand">by {brand}</p>
        <div class="similar-product-price-rating">
            <p class="similar-product-price">Rs {price}/-</p>
            <p class="similar-product-rating">{rating} &#9733;</p>
        </div>
    </a>
</li>"#,
        id = record.id,
        image_url = escape_html(&record.image_url),
        title = escape_html(&record.title),
        brand = escape_html(&record.brand),
        price = format_price(record.price),
        rating = record.rating,
    )
}

/// Whole rupee amounts render without a fraction.
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{:.2}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(100.0), "100");
        assert_eq!(format_price(99.5), "99.50");
    }

    #[test]
    fn test_empty_product_renders_nothing() {
        let mut state = ViewState::new();
        state.status = storefront_state::ApiStatus::Success;
        assert!(render_product(&state).is_empty());
    }
}
