use quickview_core::{Image, Money, SelectedOption};

use super::*;

fn variant(id: &str, available: bool, pairs: &[(&str, &str)]) -> ProductVariant {
    ProductVariant {
        id: id.to_string(),
        title: None,
        available_for_sale: available,
        quantity_available: None,
        price: Money::new("20.00", "USD"),
        compare_at_price: None,
        image: None,
        selected_options: pairs
            .iter()
            .map(|(n, v)| SelectedOption::new(*n, *v))
            .collect(),
    }
}

fn image(id: &str) -> Image {
    Image {
        id: Some(id.to_string()),
        url: format!("https://cdn.example.com/{id}.jpg"),
        alt_text: None,
        width: None,
        height: None,
    }
}

fn size_options() -> Vec<ProductOption> {
    vec![ProductOption::new("Size", ["S", "M", "L"])]
}

fn size_variants() -> Vec<ProductVariant> {
    vec![
        variant("v-s", false, &[("Size", "S")]),
        variant("v-m", true, &[("Size", "M")]),
    ]
}

fn shirt() -> (Vec<ProductOption>, Vec<ProductVariant>) {
    let options = vec![
        ProductOption::new("Size", ["S", "M"]),
        ProductOption::new("Color", ["Red", "Blue"]),
    ];
    let mut m_blue = variant("m-blue", true, &[("Size", "M"), ("Color", "Blue")]);
    m_blue.price = Money::new("24.00", "USD");
    m_blue.image = Some(image("m-blue"));
    let variants = vec![
        variant("s-red", true, &[("Size", "S"), ("Color", "Red")]),
        variant("s-blue", false, &[("Size", "S"), ("Color", "Blue")]),
        m_blue,
    ];
    (options, variants)
}

#[test]
fn defaults_skip_unavailable_leading_values() {
    let selection = VariantSelection::new(size_options(), size_variants());
    assert_eq!(
        selection.selected_options().get("Size").map(String::as_str),
        Some("M")
    );
    assert_eq!(
        selection.resolved_variant().map(|v| v.id.as_str()),
        Some("v-m")
    );
}

#[test]
fn explicitly_selecting_sold_out_value_resolves_to_that_variant() {
    let mut selection = VariantSelection::new(size_options(), size_variants());
    assert!(!selection.is_option_available("Size", "S"));
    selection.select_option("Size", "S");

    let resolved = selection.resolved_variant();
    assert_eq!(resolved.map(|v| v.id.as_str()), Some("v-s"));
    assert!(resolved.is_some_and(|v| !v.available_for_sale));
    assert!(!crate::display::can_add_to_bag(resolved));
    assert_eq!(selection.price(), Some("20.00"));
}

#[test]
fn selecting_nonexistent_value_resolves_to_none() {
    let mut selection = VariantSelection::new(size_options(), size_variants());
    selection.select_option("Size", "L");
    assert!(selection.resolved_variant().is_none());
    assert!(selection.price().is_none());
}

#[test]
fn option_without_available_values_stays_unset() {
    let options = vec![
        ProductOption::new("Size", ["S"]),
        ProductOption::new("Finish", ["Matte"]),
    ];
    let variants = vec![variant("v", false, &[("Size", "S"), ("Finish", "Matte")])];
    let selection = VariantSelection::new(options, variants);
    assert!(selection.selected_options().is_empty());
    assert!(selection.resolved_variant().is_none());
}

#[test]
fn defaults_evaluate_each_option_against_empty_selection() {
    let (options, variants) = shirt();
    let selection = VariantSelection::new(options, variants);
    // S is available via s-red and Red via s-red; Blue is never reached
    // because Red comes first in display order.
    assert_eq!(selection.selected_options().get("Size").map(String::as_str), Some("S"));
    assert_eq!(selection.selected_options().get("Color").map(String::as_str), Some("Red"));
    assert_eq!(
        selection.resolved_variant().map(|v| v.id.as_str()),
        Some("s-red")
    );
}

#[test]
fn select_option_updates_derived_state_together() {
    let (options, variants) = shirt();
    let mut selection = VariantSelection::new(options, variants);
    selection.select_option("Size", "M");
    selection.select_option("Color", "Blue");

    let state = selection.state();
    assert_eq!(state.resolved_variant.map(|v| v.id.as_str()), Some("m-blue"));
    assert_eq!(state.price, Some("24.00"));
    assert_eq!(
        state.selected_variant_image.and_then(|i| i.id.as_deref()),
        Some("m-blue")
    );
}

#[test]
fn select_option_is_idempotent() {
    let (options, variants) = shirt();
    let mut once = VariantSelection::new(options.clone(), variants.clone());
    let mut twice = VariantSelection::new(options, variants);

    once.select_option("Color", "Blue");
    twice.select_option("Color", "Blue");
    twice.select_option("Color", "Blue");

    assert_eq!(once.selected_options(), twice.selected_options());
    assert_eq!(once.state(), twice.state());
}

#[test]
fn select_if_available_rejects_disabled_pill() {
    let (options, variants) = shirt();
    let mut selection = VariantSelection::new(options, variants);
    // Size S is selected; S/Blue is sold out.
    assert!(!selection.select_if_available("Color", "Blue"));
    assert_eq!(
        selection.selected_options().get("Color").map(String::as_str),
        Some("Red")
    );
    // Only M/Blue exists, so M is disabled while Red is selected.
    assert!(!selection.is_option_available("Size", "M"));
    assert!(!selection.select_if_available("Size", "M"));
}

#[test]
fn rejected_choice_leaves_state_unchanged() {
    let (options, variants) = shirt();
    let mut selection = VariantSelection::new(options, variants);
    let before_selected = selection.selected_options().clone();
    let before_variant = selection.resolved_variant().map(|v| v.id.clone());
    let before_price = selection.price().map(str::to_owned);

    assert!(!selection.select_if_available("Color", "Blue"));
    assert!(!selection.select_if_available("Size", "M"));

    let state = selection.state();
    assert_eq!(state.selected_options, &before_selected);
    assert_eq!(state.resolved_variant.map(|v| v.id.clone()), before_variant);
    assert_eq!(state.price.map(str::to_owned), before_price);
}

#[test]
fn select_if_available_switches_to_enabled_pill() {
    let (options, mut variants) = shirt();
    let mut m_red = variant("m-red", true, &[("Size", "M"), ("Color", "Red")]);
    m_red.price = Money::new("22.00", "USD");
    variants.push(m_red);
    let mut selection = VariantSelection::new(options, variants);

    assert!(selection.select_if_available("Size", "M"));

    let state = selection.state();
    assert_eq!(
        state.selected_options.get("Size").map(String::as_str),
        Some("M")
    );
    assert_eq!(state.resolved_variant.map(|v| v.id.as_str()), Some("m-red"));
    assert_eq!(state.price, Some("22.00"));
}

#[test]
fn identical_catalog_does_not_reset_selection() {
    let (options, variants) = shirt();
    let mut selection = VariantSelection::new(options.clone(), variants.clone());
    selection.select_option("Size", "M");
    selection.select_option("Color", "Blue");
    let before = selection.selected_options().clone();

    let reset = selection.replace_catalog(options, variants);

    assert!(!reset);
    assert_eq!(selection.selected_options(), &before);
}

#[test]
fn identical_catalog_still_picks_up_new_prices() {
    let (options, mut variants) = shirt();
    let mut selection = VariantSelection::new(options.clone(), variants.clone());
    variants[0].price = Money::new("18.00", "USD");

    assert!(!selection.replace_catalog(options, variants));
    assert_eq!(selection.price(), Some("18.00"));
}

#[test]
fn different_catalog_resets_to_fresh_defaults() {
    let (options, variants) = shirt();
    let mut selection = VariantSelection::new(options, variants);
    selection.select_option("Color", "Blue");

    let reset = selection.replace_catalog(size_options(), size_variants());

    assert!(reset);
    let expected = default_selection(&size_options(), &size_variants());
    assert_eq!(selection.selected_options(), &expected);
}

#[test]
fn empty_catalog_has_no_state() {
    let selection = VariantSelection::default();
    let state = selection.state();
    assert!(state.selected_options.is_empty());
    assert!(state.resolved_variant.is_none());
    assert!(state.price.is_none());
    assert!(state.selected_variant_image.is_none());
}

#[test]
fn option_groups_flag_selected_and_available_values() {
    let (options, variants) = shirt();
    let selection = VariantSelection::new(options, variants);
    let groups = selection.option_groups();

    assert_eq!(groups.len(), 2);
    let color = &groups[1];
    assert_eq!(color.name, "Color");
    assert_eq!(
        color.values,
        vec![
            OptionPill {
                value: "Red".to_string(),
                selected: true,
                available: true,
            },
            OptionPill {
                value: "Blue".to_string(),
                selected: false,
                available: false,
            },
        ]
    );
}
