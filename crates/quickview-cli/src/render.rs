//! Plain-text rendering of the grid and the quick view.

use std::fmt::Write as _;

use quickview_core::{image_url, Product};
use quickview_variants::{
    can_add_to_bag, compare_at_display, display_price, gallery_images, OptionGroup,
    ProductCard, VariantSelection,
};

pub(crate) fn render_grid(title: &str, cards: &[ProductCard]) -> String {
    let mut out = format!("{title}\n");
    if cards.is_empty() {
        out.push_str("  (no products)\n");
        return out;
    }
    for card in cards {
        let _ = write!(out, "  {:<40} {}", card.title, card.price);
        if let Some(compare_at) = &card.compare_at {
            let _ = write!(out, " (was {compare_at})");
        }
        if card.available == Some(false) {
            out.push_str(" [sold out]");
        }
        let _ = writeln!(out, "\n    /products/{}", card.handle);
    }
    out
}

/// Selected pills are bracketed, unavailable pills are crossed out.
fn render_option_group(group: &OptionGroup) -> String {
    let pills: Vec<String> = group
        .values
        .iter()
        .map(|pill| match (pill.selected, pill.available) {
            (true, true) => format!("[{}]", pill.value),
            (true, false) => format!("[x {}]", pill.value),
            (false, true) => pill.value.clone(),
            (false, false) => format!("x {}", pill.value),
        })
        .collect();
    format!("{}: {}", group.name, pills.join("  "))
}

pub(crate) fn render_quick_view(product: &Product, selection: &VariantSelection) -> String {
    let state = selection.state();
    let price = display_price(product, state.resolved_variant);
    let compare_at = compare_at_display(product, state.resolved_variant, &price);

    let mut out = format!("{}\n", product.title);
    if let Some(vendor) = &product.vendor {
        let _ = writeln!(out, "by {vendor}");
    }
    match compare_at {
        Some(was) => {
            let _ = writeln!(out, "{price}  (was {was})");
        }
        None => {
            let _ = writeln!(out, "{price}");
        }
    }

    if !product.has_available_variants() {
        out.push_str("sold out\n");
    }

    for group in selection.option_groups() {
        let _ = writeln!(out, "{}", render_option_group(&group));
    }

    match state.resolved_variant {
        Some(variant) => {
            let label = variant.title.as_deref().unwrap_or(&variant.id);
            let _ = writeln!(out, "variant: {label}");
        }
        None => out.push_str("variant: none\n"),
    }
    let action = if can_add_to_bag(state.resolved_variant) {
        "add to bag"
    } else {
        "unavailable"
    };
    let _ = writeln!(out, "action: {action}");

    let primary = gallery_images(product, state.selected_variant_image).into_iter().next();
    let _ = writeln!(out, "image: {}", image_url(primary, None));
    out
}
