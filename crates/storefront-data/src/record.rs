//! Catalog records and payload normalization.

use serde::{Deserialize, Serialize};

/// Wire shape of one catalog item as the API sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub id: u64,
    pub image_url: String,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub brand: String,
    pub total_reviews: u32,
    pub rating: f64,
    pub availability: String,
}

/// Wire shape of the detail endpoint: the primary product's fields plus an
/// embedded list of similar products with the same field set.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProductPayload {
    #[serde(flatten)]
    pub product: RawProduct,
    #[serde(default)]
    pub similar_products: Vec<RawProduct>,
}

/// Normalized representation of one catalog item.
///
/// Immutable once produced; a successful fetch replaces records wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    pub id: u64,
    pub image_url: String,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub brand: String,
    pub total_reviews: u32,
    pub rating: f64,
    pub availability: String,
}

impl ProductRecord {
    /// Normalize one raw catalog item. Field renaming only, no coercion.
    pub fn from_raw(raw: RawProduct) -> Self {
        Self {
            id: raw.id,
            image_url: raw.image_url,
            title: raw.title,
            price: raw.price,
            description: raw.description,
            brand: raw.brand,
            total_reviews: raw.total_reviews,
            rating: raw.rating,
            availability: raw.availability,
        }
    }
}

/// Result of a successful fetch: the primary record and its similar products.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: ProductRecord,
    pub similar_products: Vec<ProductRecord>,
}

/// Normalize a raw detail payload. Every similar-products entry goes through
/// the same transform as the primary product, preserving order.
pub fn normalize(payload: RawProductPayload) -> ProductDetail {
    ProductDetail {
        product: ProductRecord::from_raw(payload.product),
        similar_products: payload
            .similar_products
            .into_iter()
            .map(ProductRecord::from_raw)
            .collect(),
    }
}
