//! Home page route handler.
//!
//! Two-tier data loading: the featured collection is critical (its failure
//! fails the page), while the recommended products resolve independently and
//! collapse to an absent region on failure. Every swatch state of every card
//! is resolved server-side, so swatch clicks never issue a network call.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::catalog::ProductCard;
use crate::catalog::selection::color_option;
use crate::error::Result;
use crate::filters;
use crate::shopify::types::{Collection, Image, Product};
use crate::state::AppState;

// =============================================================================
// View Types
// =============================================================================

/// Image display data for templates.
#[derive(Clone)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

impl From<&Image> for ImageView {
    fn from(image: &Image) -> Self {
        Self {
            url: image.url.clone(),
            alt: image.alt_text.clone().unwrap_or_default(),
        }
    }
}

/// Featured collection display data.
#[derive(Clone)]
pub struct CollectionView {
    pub title: String,
    pub handle: String,
    pub image: Option<ImageView>,
}

impl From<&Collection> for CollectionView {
    fn from(collection: &Collection) -> Self {
        Self {
            title: collection.title.clone(),
            handle: collection.handle.clone(),
            image: collection.image.as_ref().map(ImageView::from),
        }
    }
}

/// One pre-resolved swatch state of a product card.
///
/// The template ships every state in the initial HTML; a small inline script
/// toggles the active one when a swatch is clicked.
#[derive(Clone)]
pub struct CardStateView {
    /// Color value this state belongs to; empty for the base state of a
    /// product without a color option.
    pub value: String,
    pub selected: bool,
    pub price: String,
    pub compare_at_price: Option<String>,
    pub on_sale: bool,
    pub image: Option<ImageView>,
    pub hover_image: Option<ImageView>,
}

/// Product card display data.
#[derive(Clone)]
pub struct ProductCardView {
    pub handle: String,
    pub title: String,
    pub vendor: String,
    /// Color values for the swatch row; empty hides the row.
    pub swatches: Vec<String>,
    pub states: Vec<CardStateView>,
}

impl ProductCardView {
    fn snapshot(card: &ProductCard<'_>, value: String, selected: bool) -> CardStateView {
        CardStateView {
            value,
            selected,
            price: card.price().to_string(),
            compare_at_price: card.compare_at_price().map(ToString::to_string),
            on_sale: card.on_sale(),
            image: card.image().map(ImageView::from),
            hover_image: card.hover_image().map(ImageView::from),
        }
    }

    /// Build the card view by walking the card through every color value.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        let swatches: Vec<String> = color_option(product)
            .map(|opt| opt.values.clone())
            .unwrap_or_default();

        let mut card = ProductCard::new(product);
        let default = card.selected_option().map(str::to_owned);

        let states = if swatches.is_empty() {
            vec![Self::snapshot(&card, String::new(), true)]
        } else {
            swatches
                .iter()
                .map(|value| {
                    card.select(value.clone());
                    let selected = default.as_deref() == Some(value.as_str());
                    Self::snapshot(&card, value.clone(), selected)
                })
                .collect()
        };

        Self {
            handle: product.handle.clone(),
            title: product.title.clone(),
            vendor: product.vendor.clone(),
            swatches,
            states,
        }
    }
}

// =============================================================================
// Template & Handler
// =============================================================================

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Featured collection hero.
    pub featured: CollectionView,
    /// Recommended product cards; `None` when the deferred fetch failed.
    pub recommended: Option<Vec<ProductCardView>>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<HomeTemplate> {
    // Deferred tier: start the recommended-products fetch so it resolves
    // while the critical fetch is awaited. One attempt, no timeout, no retry.
    let deferred = tokio::spawn({
        let storefront = state.storefront().clone();
        async move { storefront.recommended_products().await }
    });

    // Critical tier: the featured collection must load or the page fails.
    let featured = state.storefront().featured_collection().await?;

    // The deferred result cannot fail the page; errors (and panics) collapse
    // into an absent region.
    let recommended = match deferred.await {
        Ok(Ok(products)) => Some(
            products
                .iter()
                .map(ProductCardView::from_product)
                .collect::<Vec<_>>(),
        ),
        Ok(Err(e)) => {
            tracing::error!("Failed to fetch recommended products: {e}");
            None
        }
        Err(e) => {
            tracing::error!("Recommended products task failed: {e}");
            None
        }
    };

    Ok(HomeTemplate {
        featured: CollectionView::from(&featured),
        recommended,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::selection::COLOR_OPTION;
    use crate::shopify::types::{
        Money, PriceRange, ProductOption, ProductVariant, SelectedOption,
    };

    fn money(amount: &str) -> Money {
        Money::parse(amount, "USD").unwrap()
    }

    fn shirt() -> Product {
        Product {
            id: "gid://shopify/Product/1".to_string(),
            handle: "drift-tee".to_string(),
            title: "Drift Tee".to_string(),
            vendor: "Driftwood Supply".to_string(),
            price_range: PriceRange {
                min_variant_price: money("10.00"),
            },
            options: vec![ProductOption {
                id: "opt-1".to_string(),
                name: COLOR_OPTION.to_string(),
                values: vec!["Red".to_string(), "Blue".to_string()],
            }],
            images: vec![
                Image {
                    id: None,
                    url: "red.jpg".to_string(),
                    alt_text: Some("Red shirt".to_string()),
                    width: None,
                    height: None,
                },
                Image {
                    id: None,
                    url: "blue.jpg".to_string(),
                    alt_text: Some("Blue shirt".to_string()),
                    width: None,
                    height: None,
                },
            ],
            variants: vec![
                ProductVariant {
                    id: "v-red".to_string(),
                    price: money("10.00"),
                    compare_at_price: None,
                    selected_options: vec![SelectedOption {
                        name: COLOR_OPTION.to_string(),
                        value: "Red".to_string(),
                    }],
                },
                ProductVariant {
                    id: "v-blue".to_string(),
                    price: money("15.00"),
                    compare_at_price: Some(money("20.00")),
                    selected_options: vec![SelectedOption {
                        name: COLOR_OPTION.to_string(),
                        value: "Blue".to_string(),
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_card_view_one_state_per_swatch() {
        let view = ProductCardView::from_product(&shirt());

        assert_eq!(view.swatches, vec!["Red", "Blue"]);
        assert_eq!(view.states.len(), 2);

        let red = &view.states[0];
        assert!(red.selected);
        assert_eq!(red.price, "$10.00");
        assert!(!red.on_sale);
        assert!(red.compare_at_price.is_none());

        let blue = &view.states[1];
        assert!(!blue.selected);
        assert_eq!(blue.price, "$15.00");
        assert_eq!(blue.compare_at_price.as_deref(), Some("$20.00"));
        assert!(blue.on_sale);
    }

    #[test]
    fn test_card_view_without_color_option() {
        let mut product = shirt();
        product.options.clear();
        let view = ProductCardView::from_product(&product);

        assert!(view.swatches.is_empty());
        assert_eq!(view.states.len(), 1);
        let base = &view.states[0];
        assert!(base.selected);
        assert!(base.value.is_empty());
        assert_eq!(base.price, "$10.00");
        assert_eq!(base.image.as_ref().unwrap().url, "red.jpg");
    }

    #[test]
    fn test_home_template_renders_all_states() {
        let template = HomeTemplate {
            featured: CollectionView {
                title: "Frontpage".to_string(),
                handle: "frontpage".to_string(),
                image: None,
            },
            recommended: Some(vec![ProductCardView::from_product(&shirt())]),
        };

        let html = template.render().unwrap();
        assert!(html.contains("/collections/frontpage"));
        assert!(html.contains("/products/drift-tee"));
        assert!(html.contains("$10.00"));
        assert!(html.contains("$15.00"));
        assert!(html.contains("$20.00"));
        // Discount indicator appears once, for the Blue state only
        assert_eq!(html.matches("badge-sale").count(), 1);
    }

    #[test]
    fn test_home_template_renders_empty_recommended_region() {
        let template = HomeTemplate {
            featured: CollectionView {
                title: "Frontpage".to_string(),
                handle: "frontpage".to_string(),
                image: None,
            },
            recommended: None,
        };

        let html = template.render().unwrap();
        assert!(html.contains("/collections/frontpage"));
        assert!(html.contains("data-recommended-empty"));
    }
}
