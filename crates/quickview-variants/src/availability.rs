use quickview_core::{ProductVariant, SelectedOptions};

/// Returns `true` if choosing `option_value` for `option_name` on top of
/// `current_selection` can still reach an in-stock variant.
///
/// The hypothetical selection is `current_selection` with `option_name`
/// overridden. A variant satisfies it when it is available for sale and each
/// of its option entries is either unset in the hypothetical selection or
/// equal to it. Options the shopper has not chosen yet impose no constraint.
#[must_use]
pub fn is_option_value_available(
    option_name: &str,
    option_value: &str,
    current_selection: &SelectedOptions,
    variants: &[ProductVariant],
) -> bool {
    variants.iter().any(|variant| {
        variant.available_for_sale
            && variant.selected_options.iter().all(|opt| {
                let chosen = if opt.name == option_name {
                    Some(option_value)
                } else {
                    current_selection.get(&opt.name).map(String::as_str)
                };
                chosen.is_none_or(|value| value == opt.value)
            })
    })
}
