//! Cache value types for Storefront API responses.

use crate::shopify::types::{Collection, Product};

/// Cached value types, keyed by query name + buyer context.
#[derive(Debug, Clone)]
pub enum CacheValue {
    FeaturedCollection(Box<Collection>),
    RecommendedProducts(Vec<Product>),
}
