//! GraphQL query documents and wire types for the Storefront API.
//!
//! Documents are plain `const` strings and responses are mirrored by serde
//! structs, so the wire shapes live next to the queries that produce them.
//! Field names follow the GraphQL schema's camelCase via `rename_all`.

use serde::{Deserialize, Serialize};

// =============================================================================
// Query documents
// =============================================================================

/// The single most-recently-updated collection, for the home hero.
pub const FEATURED_COLLECTION_QUERY: &str = r"
query FeaturedCollection($country: CountryCode, $language: LanguageCode)
@inContext(country: $country, language: $language) {
  collections(first: 1, sortKey: UPDATED_AT, reverse: true) {
    nodes {
      id
      title
      handle
      image {
        id
        url
        altText
        width
        height
      }
    }
  }
}
";

/// The most-recently-updated products, with enough option/variant/image data
/// to resolve every swatch state without further queries.
pub const RECOMMENDED_PRODUCTS_QUERY: &str = r"
query RecommendedProducts($first: Int!, $imageCount: Int!, $variantCount: Int!, $country: CountryCode, $language: LanguageCode)
@inContext(country: $country, language: $language) {
  products(first: $first, sortKey: UPDATED_AT, reverse: true) {
    nodes {
      id
      title
      handle
      vendor
      priceRange {
        minVariantPrice {
          amount
          currencyCode
        }
      }
      options {
        id
        name
        values
      }
      images(first: $imageCount) {
        nodes {
          id
          url
          altText
          width
          height
        }
      }
      variants(first: $variantCount) {
        nodes {
          id
          price {
            amount
            currencyCode
          }
          compareAtPrice {
            amount
            currencyCode
          }
          selectedOptions {
            name
            value
          }
        }
      }
    }
  }
}
";

// =============================================================================
// Variables
// =============================================================================

/// Variables for [`FEATURED_COLLECTION_QUERY`].
#[derive(Debug, Serialize)]
pub struct FeaturedCollectionVariables<'a> {
    pub country: Option<&'a str>,
    pub language: Option<&'a str>,
}

/// Variables for [`RECOMMENDED_PRODUCTS_QUERY`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedProductsVariables<'a> {
    pub first: i64,
    pub image_count: i64,
    pub variant_count: i64,
    pub country: Option<&'a str>,
    pub language: Option<&'a str>,
}

// =============================================================================
// Wire response types
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedCollectionData {
    pub collections: CollectionNodes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionNodes {
    pub nodes: Vec<CollectionNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionNode {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub image: Option<ImageNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    pub id: Option<String>,
    pub url: String,
    pub alt_text: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendedProductsData {
    pub products: ProductNodes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductNodes {
    pub nodes: Vec<ProductNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub vendor: String,
    pub price_range: PriceRangeNode,
    pub options: Vec<OptionNode>,
    pub images: ImageNodes,
    pub variants: VariantNodes,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeNode {
    pub min_variant_price: MoneyNode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyNode {
    /// Decimal amount as string (preserves precision on the wire).
    pub amount: String,
    pub currency_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptionNode {
    pub id: String,
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageNodes {
    pub nodes: Vec<ImageNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantNodes {
    pub nodes: Vec<VariantNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantNode {
    pub id: String,
    pub price: MoneyNode,
    pub compare_at_price: Option<MoneyNode>,
    pub selected_options: Vec<SelectedOptionNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectedOptionNode {
    pub name: String,
    pub value: String,
}
