//! Normalization from Storefront wire types into [`quickview_core`] models.
//!
//! Connections are flattened, empty vendors dropped, and variant option
//! entries checked for shape. The variant engine relies on each variant naming
//! an option at most once.

use std::collections::HashSet;

use quickview_core::{Collection, Product, ProductSummary, ProductVariant};

use crate::error::StorefrontError;
use crate::types::{StorefrontCollection, StorefrontCollectionProduct, StorefrontProduct};

/// Normalizes a `getProductByHandle` product into a [`Product`].
///
/// # Errors
///
/// Returns [`StorefrontError::Normalization`] if a variant lists the same
/// option name twice.
pub fn normalize_product(product: StorefrontProduct) -> Result<Product, StorefrontError> {
    for variant in &product.variants.nodes {
        check_variant_options(&product.id, variant)?;
    }

    let vendor = product.vendor.filter(|v| !v.trim().is_empty());

    Ok(Product {
        id: product.id,
        handle: product.handle,
        title: product.title,
        description: product.description,
        description_html: product.description_html,
        vendor,
        tags: product.tags,
        featured_image: product.featured_image,
        images: product.images.nodes,
        options: product.options,
        price_range: product.price_range,
        compare_at_price_range: product.compare_at_price_range,
        variants: product.variants.nodes,
    })
}

/// Normalizes one grid node into a [`ProductSummary`].
#[must_use]
pub fn normalize_summary(product: StorefrontCollectionProduct) -> ProductSummary {
    let first_variant_available = product
        .variants
        .nodes
        .first()
        .map(|v| v.available_for_sale);

    ProductSummary {
        id: product.id,
        handle: product.handle,
        title: product.title,
        description: product.description,
        featured_image: product.featured_image,
        price_range: product.price_range,
        compare_at_price_range: product.compare_at_price_range,
        options: product.options,
        first_variant_available,
    }
}

#[must_use]
pub fn normalize_collection(collection: StorefrontCollection) -> Collection {
    Collection {
        id: collection.id,
        title: collection.title,
        description: collection.description,
        products: collection
            .products
            .nodes
            .into_iter()
            .map(normalize_summary)
            .collect(),
    }
}

fn check_variant_options(product_id: &str, variant: &ProductVariant) -> Result<(), StorefrontError> {
    let mut seen = HashSet::with_capacity(variant.selected_options.len());
    for entry in &variant.selected_options {
        if !seen.insert(entry.name.as_str()) {
            return Err(StorefrontError::Normalization {
                product_id: product_id.to_owned(),
                reason: format!(
                    "variant {} lists option \"{}\" more than once",
                    variant.id, entry.name
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
