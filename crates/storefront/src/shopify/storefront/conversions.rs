//! Conversions from wire types to domain types.

use driftwood_core::Money;

use crate::shopify::ShopifyError;
use crate::shopify::types::{
    Collection, Image, PriceRange, Product, ProductOption, ProductVariant, SelectedOption,
};

use super::queries::{CollectionNode, ImageNode, MoneyNode, ProductNode, VariantNode};

fn convert_money(node: MoneyNode) -> Result<Money, ShopifyError> {
    Ok(Money::parse(&node.amount, &node.currency_code)?)
}

fn convert_image(node: ImageNode) -> Image {
    Image {
        id: node.id,
        url: node.url,
        alt_text: node.alt_text,
        width: node.width,
        height: node.height,
    }
}

fn convert_variant(node: VariantNode) -> Result<ProductVariant, ShopifyError> {
    Ok(ProductVariant {
        id: node.id,
        price: convert_money(node.price)?,
        compare_at_price: node.compare_at_price.map(convert_money).transpose()?,
        selected_options: node
            .selected_options
            .into_iter()
            .map(|so| SelectedOption {
                name: so.name,
                value: so.value,
            })
            .collect(),
    })
}

/// Convert a product node into the domain `Product`.
///
/// # Errors
///
/// Returns an error if any money amount is not a valid decimal.
pub fn convert_product(node: ProductNode) -> Result<Product, ShopifyError> {
    Ok(Product {
        id: node.id,
        title: node.title,
        handle: node.handle,
        vendor: node.vendor,
        price_range: PriceRange {
            min_variant_price: convert_money(node.price_range.min_variant_price)?,
        },
        options: node
            .options
            .into_iter()
            .map(|opt| ProductOption {
                id: opt.id,
                name: opt.name,
                values: opt.values,
            })
            .collect(),
        images: node.images.nodes.into_iter().map(convert_image).collect(),
        variants: node
            .variants
            .nodes
            .into_iter()
            .map(convert_variant)
            .collect::<Result<_, _>>()?,
    })
}

/// Convert a collection node into the domain `Collection`.
pub fn convert_collection(node: CollectionNode) -> Collection {
    Collection {
        id: node.id,
        title: node.title,
        handle: node.handle,
        image: node.image.map(convert_image),
    }
}
