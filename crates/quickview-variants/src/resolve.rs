use quickview_core::{ProductOption, ProductVariant, SelectedOptions};

/// Finds the variant the current selection points at.
///
/// A product without options resolves to its first available variant, or its
/// first variant when none is available (so the unavailable state still
/// reaches the UI). Otherwise a variant matches only when every one of its
/// option entries equals the selected value for that option; the first match
/// wins and `None` means the combination does not exist.
#[must_use]
pub fn resolve_variant<'a>(
    options: &[ProductOption],
    variants: &'a [ProductVariant],
    selected: &SelectedOptions,
) -> Option<&'a ProductVariant> {
    if options.is_empty() && !variants.is_empty() {
        return variants
            .iter()
            .find(|v| v.available_for_sale)
            .or_else(|| variants.first());
    }

    let mut matches = variants.iter().filter(|v| matches_fully(v, selected));
    let first = matches.next()?;

    if let Some(duplicate) = matches.next() {
        tracing::warn!(
            first_variant = %first.id,
            duplicate_variant = %duplicate.id,
            "multiple variants share the selected option combination; using the first"
        );
    }

    Some(first)
}

fn matches_fully(variant: &ProductVariant, selected: &SelectedOptions) -> bool {
    variant
        .selected_options
        .iter()
        .all(|opt| selected.get(&opt.name).is_some_and(|value| *value == opt.value))
}

#[cfg(test)]
mod tests {
    use quickview_core::{Money, SelectedOption};

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

    fn selection(pairs: &[(&str, &str)]) -> SelectedOptions {
        pairs
            .iter()
            .map(|(n, v)| ((*n).to_string(), (*v).to_string()))
            .collect()
    }

    fn size_color_options() -> Vec<ProductOption> {
        vec![
            ProductOption::new("Size", ["S", "M"]),
            ProductOption::new("Color", ["Red", "Blue"]),
        ]
    }

    #[test]
    fn no_options_picks_first_available_variant() {
        let variants = vec![
            variant("first", false, &[]),
            variant("second", true, &[]),
        ];
        let resolved = resolve_variant(&[], &variants, &SelectedOptions::new());
        assert_eq!(resolved.map(|v| v.id.as_str()), Some("second"));
    }

    #[test]
    fn no_options_falls_back_to_first_variant_when_none_available() {
        let variants = vec![
            variant("first", false, &[]),
            variant("second", false, &[]),
        ];
        let resolved = resolve_variant(&[], &variants, &SelectedOptions::new());
        assert_eq!(resolved.map(|v| v.id.as_str()), Some("first"));
    }

    #[test]
    fn no_options_and_no_variants_is_none() {
        assert!(resolve_variant(&[], &[], &SelectedOptions::new()).is_none());
    }

    #[test]
    fn full_selection_resolves_exact_variant() {
        let variants = vec![
            variant("s-red", true, &[("Size", "S"), ("Color", "Red")]),
            variant("m-blue", true, &[("Size", "M"), ("Color", "Blue")]),
        ];
        let resolved = resolve_variant(
            &size_color_options(),
            &variants,
            &selection(&[("Size", "M"), ("Color", "Blue")]),
        );
        assert_eq!(resolved.map(|v| v.id.as_str()), Some("m-blue"));
    }

    #[test]
    fn resolution_ignores_availability_when_options_exist() {
        let variants = vec![variant("s-red", false, &[("Size", "S"), ("Color", "Red")])];
        let resolved = resolve_variant(
            &size_color_options(),
            &variants,
            &selection(&[("Size", "S"), ("Color", "Red")]),
        );
        assert_eq!(resolved.map(|v| v.id.as_str()), Some("s-red"));
    }

    #[test]
    fn partial_selection_does_not_resolve() {
        let variants = vec![variant("s-red", true, &[("Size", "S"), ("Color", "Red")])];
        let resolved = resolve_variant(
            &size_color_options(),
            &variants,
            &selection(&[("Size", "S")]),
        );
        assert!(resolved.is_none());
    }

    #[test]
    fn nonexistent_combination_is_none() {
        let variants = vec![
            variant("s-red", true, &[("Size", "S"), ("Color", "Red")]),
            variant("m-blue", true, &[("Size", "M"), ("Color", "Blue")]),
        ];
        let resolved = resolve_variant(
            &size_color_options(),
            &variants,
            &selection(&[("Size", "S"), ("Color", "Blue")]),
        );
        assert!(resolved.is_none());
    }

    #[test]
    fn duplicate_combinations_resolve_to_first() {
        let variants = vec![
            variant("dup-a", true, &[("Size", "S"), ("Color", "Red")]),
            variant("dup-b", true, &[("Size", "S"), ("Color", "Red")]),
        ];
        let resolved = resolve_variant(
            &size_color_options(),
            &variants,
            &selection(&[("Size", "S"), ("Color", "Red")]),
        );
        assert_eq!(resolved.map(|v| v.id.as_str()), Some("dup-a"));
    }

    #[test]
    fn extra_selection_keys_do_not_block_a_match() {
        let options = vec![ProductOption::new("Size", ["S"])];
        let variants = vec![variant("s", true, &[("Size", "S")])];
        let resolved = resolve_variant(
            &options,
            &variants,
            &selection(&[("Size", "S"), ("Engraving", "Yes")]),
        );
        assert_eq!(resolved.map(|v| v.id.as_str()), Some("s"));
    }
}
