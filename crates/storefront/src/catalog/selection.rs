//! Pure resolver functions for color-swatch selection.
//!
//! No side effects, no I/O. A missing option, variant, or image is a valid
//! `None` result, not an error - callers fall back to base product data or
//! omit the optional UI.

use crate::shopify::types::{Image, Product, ProductOption, ProductVariant};

/// The option name that drives swatch selection.
pub const COLOR_OPTION: &str = "Color";

/// Typed accessor for the product's color option, if it declares one.
#[must_use]
pub fn color_option(product: &Product) -> Option<&ProductOption> {
    product.options.iter().find(|opt| opt.name == COLOR_OPTION)
}

/// The default selection: the first declared value of the color option.
#[must_use]
pub fn default_option(product: &Product) -> Option<&str> {
    color_option(product)
        .and_then(|opt| opt.values.first())
        .map(String::as_str)
}

/// The first variant (in declared order) whose selected options contain the
/// given color value. `None` input or no match yields `None`; the caller
/// falls back to the product's minimum variant price.
#[must_use]
pub fn selected_variant<'a>(
    product: &'a Product,
    value: Option<&str>,
) -> Option<&'a ProductVariant> {
    let value = value?;
    product.variants.iter().find(|variant| {
        variant
            .selected_options
            .iter()
            .any(|so| so.name == COLOR_OPTION && so.value == value)
    })
}

/// The image for the given color value.
///
/// With no selection, the first image (or `None` for an imageless product).
/// With a selection, the first image whose alt text contains the value
/// case-insensitively; a color with no matching alt text yields `None`
/// rather than falling back to the first image.
#[must_use]
pub fn selected_image<'a>(product: &'a Product, value: Option<&str>) -> Option<&'a Image> {
    let Some(value) = value else {
        return product.images.first();
    };

    let needle = value.to_lowercase();
    product.images.iter().find(|image| {
        image
            .alt_text
            .as_deref()
            .is_some_and(|alt| alt.to_lowercase().contains(&needle))
    })
}

/// The circular successor of `current` within `images`, for the hover-swap
/// effect. An absent or unknown current image behaves as position -1, so the
/// first image is returned. Empty list yields `None`.
#[must_use]
pub fn next_image<'a>(images: &'a [Image], current: Option<&Image>) -> Option<&'a Image> {
    if images.is_empty() {
        return None;
    }

    let position = current.and_then(|c| images.iter().position(|img| img.url == c.url));
    let next = position.map_or(0, |p| (p + 1) % images.len());
    images.get(next)
}
