//! Home page integration tests.
//!
//! Drive the full router against a mock Storefront API endpoint. The two
//! GraphQL operations are matched by operation name in the request body.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use secrecy::SecretString;
use serde_json::json;
use tower::ServiceExt;

use driftwood_storefront::config::{SentryConfig, ShopifyStorefrontConfig, StorefrontConfig};
use driftwood_storefront::state::AppState;

fn test_config(endpoint: String) -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        shopify: ShopifyStorefrontConfig {
            store: "driftwood-dev.myshopify.com".to_string(),
            api_version: "2026-01".to_string(),
            private_token: SecretString::from("shpat_aB3xY9mK2nL5pQ7rT0uW4zC6"),
            endpoint: Some(endpoint),
            country: Some("US".to_string()),
            language: Some("EN".to_string()),
        },
        sentry: SentryConfig::default(),
    }
}

fn featured_collection_body() -> serde_json::Value {
    json!({
        "data": {
            "collections": {
                "nodes": [{
                    "id": "gid://shopify/Collection/1",
                    "title": "Frontpage",
                    "handle": "frontpage",
                    "image": {
                        "id": "gid://shopify/CollectionImage/1",
                        "url": "https://cdn.example.com/hero.jpg",
                        "altText": "Coastal goods on a workbench",
                        "width": 1600,
                        "height": 900
                    }
                }]
            }
        }
    })
}

fn recommended_products_body() -> serde_json::Value {
    json!({
        "data": {
            "products": {
                "nodes": [{
                    "id": "gid://shopify/Product/1",
                    "title": "Drift Tee",
                    "handle": "drift-tee",
                    "vendor": "Driftwood Supply",
                    "priceRange": {
                        "minVariantPrice": { "amount": "10.0", "currencyCode": "USD" }
                    },
                    "options": [{
                        "id": "gid://shopify/ProductOption/1",
                        "name": "Color",
                        "values": ["Red", "Blue"]
                    }],
                    "images": {
                        "nodes": [
                            {
                                "id": "gid://shopify/ProductImage/1",
                                "url": "https://cdn.example.com/red.jpg",
                                "altText": "Red tee, front",
                                "width": 800,
                                "height": 1067
                            },
                            {
                                "id": "gid://shopify/ProductImage/2",
                                "url": "https://cdn.example.com/blue.jpg",
                                "altText": "Blue tee, front",
                                "width": 800,
                                "height": 1067
                            }
                        ]
                    },
                    "variants": {
                        "nodes": [
                            {
                                "id": "gid://shopify/ProductVariant/1",
                                "price": { "amount": "10.0", "currencyCode": "USD" },
                                "compareAtPrice": null,
                                "selectedOptions": [{ "name": "Color", "value": "Red" }]
                            },
                            {
                                "id": "gid://shopify/ProductVariant/2",
                                "price": { "amount": "15.0", "currencyCode": "USD" },
                                "compareAtPrice": { "amount": "20.0", "currencyCode": "USD" },
                                "selectedOptions": [{ "name": "Color", "value": "Blue" }]
                            }
                        ]
                    }
                }]
            }
        }
    })
}

async fn get_home(state: AppState) -> (StatusCode, String) {
    let app = driftwood_storefront::app(state);
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_home_renders_both_regions() {
    let server = MockServer::start_async().await;

    let featured = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/graphql")
                .header("Shopify-Storefront-Private-Token", "shpat_aB3xY9mK2nL5pQ7rT0uW4zC6")
                .body_contains("FeaturedCollection");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(featured_collection_body());
        })
        .await;
    let recommended = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/graphql")
                .body_contains("RecommendedProducts");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(recommended_products_body());
        })
        .await;

    let state = AppState::new(&test_config(server.url("/graphql")));
    let (status, html) = get_home(state).await;

    assert_eq!(status, StatusCode::OK);
    featured.assert_async().await;
    recommended.assert_async().await;

    // Hero region
    assert!(html.contains("/collections/frontpage"));
    assert!(html.contains("Frontpage"));

    // Card with every swatch state pre-resolved
    assert!(html.contains("/products/drift-tee"));
    assert!(html.contains("$10.00"));
    assert!(html.contains("$15.00"));
    assert!(html.contains("$20.00"));
    assert_eq!(html.matches("badge-sale").count(), 1);
    assert_eq!(html.matches("class=\"swatch\"").count(), 2);
    assert!(!html.contains("data-recommended-empty"));
}

#[tokio::test]
async fn test_home_survives_recommended_failure() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/graphql")
                .body_contains("FeaturedCollection");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(featured_collection_body());
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/graphql")
                .body_contains("RecommendedProducts");
            then.status(500).body("upstream exploded");
        })
        .await;

    let state = AppState::new(&test_config(server.url("/graphql")));
    let (status, html) = get_home(state).await;

    // The page still succeeds; the recommended region collapses.
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("/collections/frontpage"));
    assert!(html.contains("data-recommended-empty"));
    assert!(!html.contains("/products/drift-tee"));
}

#[tokio::test]
async fn test_home_fails_when_featured_collection_fails() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/graphql")
                .body_contains("FeaturedCollection");
            then.status(500).body("upstream exploded");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/graphql")
                .body_contains("RecommendedProducts");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(recommended_products_body());
        })
        .await;

    let state = AppState::new(&test_config(server.url("/graphql")));
    let (status, html) = get_home(state).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("External service error"));
}

#[tokio::test]
async fn test_home_fails_when_store_has_no_collections() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/graphql")
                .body_contains("FeaturedCollection");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "data": { "collections": { "nodes": [] } } }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/graphql")
                .body_contains("RecommendedProducts");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(recommended_products_body());
        })
        .await;

    let state = AppState::new(&test_config(server.url("/graphql")));
    let (status, _html) = get_home(state).await;

    // NotFound from the client maps through the Shopify error to a 502.
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_home_caches_upstream_responses() {
    let server = MockServer::start_async().await;

    let featured = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/graphql")
                .body_contains("FeaturedCollection");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(featured_collection_body());
        })
        .await;
    let recommended = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/graphql")
                .body_contains("RecommendedProducts");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(recommended_products_body());
        })
        .await;

    let state = AppState::new(&test_config(server.url("/graphql")));

    let (first, _) = get_home(state.clone()).await;
    let (second, _) = get_home(state).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);

    // Both queries are served from the cache on the second page view.
    featured.assert_hits_async(1).await;
    recommended.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = MockServer::start_async().await;
    let state = AppState::new(&test_config(server.url("/graphql")));
    let app = driftwood_storefront::app(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
