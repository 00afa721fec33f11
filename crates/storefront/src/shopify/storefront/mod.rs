//! Shopify Storefront API client implementation.
//!
//! Hand-written query documents executed over `reqwest`, with responses
//! cached in `moka` (5-minute TTL). Both home-page queries are parameterized
//! by buyer country and language via `@inContext`.

mod cache;
mod conversions;
pub mod queries;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::ShopifyStorefrontConfig;
use crate::shopify::ShopifyError;
use crate::shopify::types::{Collection, Product};

use cache::CacheValue;
use conversions::{convert_collection, convert_product};
use queries::{
    FEATURED_COLLECTION_QUERY, FeaturedCollectionData, FeaturedCollectionVariables,
    RECOMMENDED_PRODUCTS_QUERY, RecommendedProductsData, RecommendedProductsVariables,
};

/// Number of recommended products shown on the home page.
const RECOMMENDED_PRODUCT_COUNT: i64 = 4;
/// Images fetched per product card; enough to cover every color swatch.
const CARD_IMAGE_COUNT: i64 = 12;
/// Variants fetched per product card.
const CARD_VARIANT_COUNT: i64 = 6;

// =============================================================================
// Wire envelope
// =============================================================================

#[derive(Serialize)]
struct GraphQLRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

#[derive(serde::Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<WireError>>,
}

#[derive(serde::Deserialize)]
struct WireError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    locations: Vec<WireErrorLocation>,
    #[serde(default)]
    path: Vec<serde_json::Value>,
}

#[derive(serde::Deserialize)]
struct WireErrorLocation {
    line: i64,
    column: i64,
}

// =============================================================================
// StorefrontClient
// =============================================================================

/// Client for the Shopify Storefront API.
///
/// Provides the two read-only queries the home page needs: the featured
/// collection and the recommended products. Responses are cached for
/// 5 minutes per buyer context.
#[derive(Clone)]
pub struct StorefrontClient {
    inner: Arc<StorefrontClientInner>,
}

struct StorefrontClientInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
    country: Option<String>,
    language: Option<String>,
    cache: Cache<String, CacheValue>,
}

impl StorefrontClient {
    /// Create a new Storefront API client.
    #[must_use]
    pub fn new(config: &ShopifyStorefrontConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(100)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(StorefrontClientInner {
                client: reqwest::Client::new(),
                endpoint: config.graphql_endpoint(),
                access_token: config.private_token.expose_secret().to_string(),
                country: config.country.clone(),
                language: config.language.clone(),
                cache,
            }),
        }
    }

    /// Execute a GraphQL query document with the given variables.
    async fn execute<T, V>(&self, query: &'static str, variables: V) -> Result<T, ShopifyError>
    where
        T: DeserializeOwned,
        V: Serialize,
    {
        let request_body = GraphQLRequest { query, variables };

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            // Private access tokens use a different header than public tokens
            .header("Shopify-Storefront-Private-Token", &self.inner.access_token)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(ShopifyError::RateLimited(retry_after));
        }

        // Get the body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Shopify API returned non-success status"
            );
            return Err(ShopifyError::GraphQL(vec![super::GraphQLError {
                message: format!(
                    "HTTP {status}: {}",
                    response_text.chars().take(200).collect::<String>()
                ),
                locations: vec![],
                path: vec![],
            }]));
        }

        let response: GraphQLResponse<T> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Shopify GraphQL response"
                );
                return Err(ShopifyError::Parse(e));
            }
        };

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            return Err(ShopifyError::GraphQL(
                errors
                    .into_iter()
                    .map(|e| super::GraphQLError {
                        message: e.message,
                        locations: e
                            .locations
                            .into_iter()
                            .map(|l| super::GraphQLErrorLocation {
                                line: l.line,
                                column: l.column,
                            })
                            .collect(),
                        path: e.path,
                    })
                    .collect(),
            ));
        }

        response.data.ok_or_else(|| {
            tracing::error!(
                body = %response_text.chars().take(500).collect::<String>(),
                "Shopify GraphQL response has no data and no errors"
            );
            ShopifyError::GraphQL(vec![super::GraphQLError {
                message: "No data in response".to_string(),
                locations: vec![],
                path: vec![],
            }])
        })
    }

    fn context_key(&self) -> String {
        format!(
            "{}:{}",
            self.inner.country.as_deref().unwrap_or(""),
            self.inner.language.as_deref().unwrap_or("")
        )
    }

    /// Get the single most-recently-updated collection.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::NotFound` if the store has no collections, or
    /// another `ShopifyError` if the API request fails.
    #[instrument(skip(self))]
    pub async fn featured_collection(&self) -> Result<Collection, ShopifyError> {
        let cache_key = format!("featured-collection:{}", self.context_key());

        if let Some(CacheValue::FeaturedCollection(collection)) =
            self.inner.cache.get(&cache_key).await
        {
            debug!("Cache hit for featured collection");
            return Ok(*collection);
        }

        let variables = FeaturedCollectionVariables {
            country: self.inner.country.as_deref(),
            language: self.inner.language.as_deref(),
        };

        let data: FeaturedCollectionData = self
            .execute(FEATURED_COLLECTION_QUERY, variables)
            .await?;

        let collection = data
            .collections
            .nodes
            .into_iter()
            .next()
            .map(convert_collection)
            .ok_or_else(|| ShopifyError::NotFound("no collections published".to_string()))?;

        self.inner
            .cache
            .insert(
                cache_key,
                CacheValue::FeaturedCollection(Box::new(collection.clone())),
            )
            .await;

        Ok(collection)
    }

    /// Get the four most-recently-updated products, each with the option,
    /// image, and variant data needed to resolve every swatch state.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn recommended_products(&self) -> Result<Vec<Product>, ShopifyError> {
        let cache_key = format!("recommended-products:{}", self.context_key());

        if let Some(CacheValue::RecommendedProducts(products)) =
            self.inner.cache.get(&cache_key).await
        {
            debug!("Cache hit for recommended products");
            return Ok(products);
        }

        let variables = RecommendedProductsVariables {
            first: RECOMMENDED_PRODUCT_COUNT,
            image_count: CARD_IMAGE_COUNT,
            variant_count: CARD_VARIANT_COUNT,
            country: self.inner.country.as_deref(),
            language: self.inner.language.as_deref(),
        };

        let data: RecommendedProductsData = self
            .execute(RECOMMENDED_PRODUCTS_QUERY, variables)
            .await?;

        let products = data
            .products
            .nodes
            .into_iter()
            .map(convert_product)
            .collect::<Result<Vec<_>, _>>()?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::RecommendedProducts(products.clone()))
            .await;

        Ok(products)
    }
}
