//! Per-card selection state and derived display values.

use driftwood_core::Money;

use crate::shopify::types::{Image, Product, ProductVariant};

use super::selection::{default_option, next_image, selected_image, selected_variant};

/// A product card's selection state.
///
/// Holds one mutable field: the currently selected color value, initialized
/// to the product's default. Every display value is re-derived from the
/// current selection on each call; nothing is cached, and changing the
/// selection touches no I/O - all variant and image data was fetched with
/// the product.
#[derive(Debug, Clone)]
pub struct ProductCard<'a> {
    product: &'a Product,
    selected: Option<String>,
}

impl<'a> ProductCard<'a> {
    /// Create a card with the product's default color selected.
    #[must_use]
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            selected: default_option(product).map(str::to_owned),
        }
    }

    /// Replace the selection unconditionally.
    ///
    /// No validation against the product's declared values: an unknown value
    /// simply makes every resolver lookup fall through to its no-match
    /// branch.
    pub fn select(&mut self, value: impl Into<String>) {
        self.selected = Some(value.into());
    }

    /// The currently selected color value, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The variant matching the current selection.
    #[must_use]
    pub fn variant(&self) -> Option<&'a ProductVariant> {
        selected_variant(self.product, self.selected.as_deref())
    }

    /// The image matching the current selection.
    #[must_use]
    pub fn image(&self) -> Option<&'a Image> {
        selected_image(self.product, self.selected.as_deref())
    }

    /// Displayed price: the matched variant's price, else the product's
    /// minimum variant price.
    #[must_use]
    pub fn price(&self) -> &'a Money {
        self.variant()
            .map_or(&self.product.price_range.min_variant_price, |v| &v.price)
    }

    /// Compare-at price of the matched variant, if it has one.
    #[must_use]
    pub fn compare_at_price(&self) -> Option<&'a Money> {
        self.variant().and_then(|v| v.compare_at_price.as_ref())
    }

    /// Whether a discount indicator should be shown for the current
    /// selection.
    #[must_use]
    pub fn on_sale(&self) -> bool {
        self.compare_at_price().is_some()
    }

    /// The hover-preview image: the circular successor of the current image.
    ///
    /// Suppressed for products with fewer than two images, where the
    /// hover-swap effect would be a no-op.
    #[must_use]
    pub fn hover_image(&self) -> Option<&'a Image> {
        if self.product.images.len() > 1 {
            next_image(&self.product.images, self.image())
        } else {
            None
        }
    }
}
