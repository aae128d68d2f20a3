//! What the quick view modal and the grid cards render.

use quickview_core::{
    format_price, format_price_range, image_alt, image_url, Image, Money, Product,
    ProductSummary, ProductVariant,
};
use rust_decimal::Decimal;
use serde::Serialize;

/// Formatted price for the modal: the resolved variant's price, else the
/// product's minimum price.
#[must_use]
pub fn display_price(product: &Product, resolved: Option<&ProductVariant>) -> String {
    let money = resolved.map_or(&product.price_range.min_variant_price, |v| &v.price);
    format_price(Some(money))
}

/// Formatted compare-at ("was") price for the modal.
///
/// Uses the resolved variant's compare-at price when it has one, else the
/// product's minimum compare-at price. Returns `None` when there is none, when it is zero, or
/// when it formats the same as `display_price`.
#[must_use]
pub fn compare_at_display(
    product: &Product,
    resolved: Option<&ProductVariant>,
    display_price: &str,
) -> Option<String> {
    let money = resolved
        .and_then(|v| v.compare_at_price.as_ref())
        .or_else(|| {
            product
                .compare_at_price_range
                .as_ref()
                .map(|range| &range.min_variant_price)
        })?;

    if is_zero(money) {
        return None;
    }

    let formatted = format_price(Some(money));
    (!formatted.is_empty() && formatted != display_price).then_some(formatted)
}

/// Gallery order: the primary image (variant image, else featured, else the
/// first image) followed by the remaining images without the primary.
#[must_use]
pub fn gallery_images<'a>(product: &'a Product, variant_image: Option<&'a Image>) -> Vec<&'a Image> {
    let Some(primary) = variant_image
        .or(product.featured_image.as_ref())
        .or(product.images.first())
    else {
        return product.images.iter().collect();
    };

    std::iter::once(primary)
        .chain(product.images.iter().filter(|img| !same_image(img, primary)))
        .collect()
}

/// The add-to-bag action is enabled only for a resolved, purchasable variant.
#[must_use]
pub fn can_add_to_bag(resolved: Option<&ProductVariant>) -> bool {
    resolved.is_some_and(|v| v.available_for_sale)
}

/// One card in the collection grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub handle: String,
    pub title: String,
    pub image_url: String,
    pub image_alt: String,
    pub price: String,
    /// Struck-through range, present only when it is above the price.
    pub compare_at: Option<String>,
    pub available: Option<bool>,
}

impl ProductCard {
    #[must_use]
    pub fn from_summary(summary: &ProductSummary) -> Self {
        let price_range = &summary.price_range;
        let compare_at = summary
            .compare_at_price_range
            .as_ref()
            .filter(|compare| {
                match (
                    compare.min_variant_price.decimal(),
                    price_range.min_variant_price.decimal(),
                ) {
                    (Some(was), Some(now)) => was > now,
                    _ => false,
                }
            })
            .map(|compare| {
                format_price_range(
                    Some(&compare.min_variant_price),
                    Some(&compare.max_variant_price),
                )
            })
            .filter(|formatted| !formatted.is_empty());

        Self {
            handle: summary.handle.clone(),
            title: summary.title.clone(),
            image_url: image_url(summary.featured_image.as_ref(), None),
            image_alt: image_alt(summary.featured_image.as_ref(), &summary.title),
            price: format_price_range(
                Some(&price_range.min_variant_price),
                Some(&price_range.max_variant_price),
            ),
            compare_at,
            available: summary.first_variant_available,
        }
    }
}

fn is_zero(money: &Money) -> bool {
    money.decimal().is_some_and(|amount| amount == Decimal::ZERO)
}

// Images are matched by id; id-less images fall back to their URL.
fn same_image(a: &Image, b: &Image) -> bool {
    match (&a.id, &b.id) {
        (Some(x), Some(y)) => x == y,
        _ => a.url == b.url,
    }
}

#[cfg(test)]
#[path = "display_test.rs"]
mod tests;
