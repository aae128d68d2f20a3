//! Selection state for one product view.
//!
//! [`VariantSelection`] owns the option/variant lists and the shopper's
//! current choices. It has two transitions:
//!
//! - **reset**: on construction, and from [`VariantSelection::replace_catalog`]
//!   when the catalog's [`CatalogFingerprint`] changes, each option is seeded
//!   with its first value that is available against an empty selection.
//! - **select**: [`VariantSelection::select_option`] overwrites one option.
//!
//! The resolved variant, price, and image are computed from the current
//! selection on every read and never cached.

use quickview_core::{Image, Product, ProductOption, ProductVariant, SelectedOptions};
use serde::Serialize;

use crate::availability::is_option_value_available;
use crate::fingerprint::CatalogFingerprint;
use crate::resolve::resolve_variant;

/// Seeds a selection: for each option, its first value that can reach an
/// in-stock variant. Options with no such value stay unset.
#[must_use]
pub fn default_selection(
    options: &[ProductOption],
    variants: &[ProductVariant],
) -> SelectedOptions {
    let empty = SelectedOptions::new();
    options
        .iter()
        .filter_map(|option| {
            option
                .values
                .iter()
                .find(|value| is_option_value_available(&option.name, value, &empty, variants))
                .map(|value| (option.name.clone(), value.clone()))
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct VariantSelection {
    options: Vec<ProductOption>,
    variants: Vec<ProductVariant>,
    fingerprint: CatalogFingerprint,
    selected: SelectedOptions,
}

/// Everything the UI reads off a selection, computed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState<'a> {
    pub selected_options: &'a SelectedOptions,
    pub resolved_variant: Option<&'a ProductVariant>,
    /// Decimal amount of the resolved variant's price.
    pub price: Option<&'a str>,
    pub selected_variant_image: Option<&'a Image>,
}

/// One option row of the variant selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroup {
    pub name: String,
    pub values: Vec<OptionPill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionPill {
    pub value: String,
    pub selected: bool,
    pub available: bool,
}

impl Default for VariantSelection {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl VariantSelection {
    #[must_use]
    pub fn new(options: Vec<ProductOption>, variants: Vec<ProductVariant>) -> Self {
        let fingerprint = CatalogFingerprint::of(&options, &variants);
        let selected = default_selection(&options, &variants);
        Self {
            options,
            variants,
            fingerprint,
            selected,
        }
    }

    #[must_use]
    pub fn for_product(product: &Product) -> Self {
        Self::new(product.options.clone(), product.variants.clone())
    }

    /// Swaps in a freshly fetched option/variant set.
    ///
    /// The stored lists are always replaced. The selection is recomputed from
    /// defaults only when the structural content differs; returns `true` when
    /// that reset happened.
    pub fn replace_catalog(
        &mut self,
        options: Vec<ProductOption>,
        variants: Vec<ProductVariant>,
    ) -> bool {
        let fingerprint = CatalogFingerprint::of(&options, &variants);
        self.options = options;
        self.variants = variants;

        if fingerprint == self.fingerprint {
            tracing::trace!("catalog content unchanged; keeping current selection");
            return false;
        }

        tracing::debug!(
            fingerprint = %fingerprint.to_hex(),
            options = self.options.len(),
            variants = self.variants.len(),
            "catalog changed; resetting selection to defaults"
        );
        self.fingerprint = fingerprint;
        self.selected = default_selection(&self.options, &self.variants);
        true
    }

    /// Sets `name` to `value`, replacing any previous choice.
    ///
    /// Availability is not checked here; see [`Self::select_if_available`].
    pub fn select_option(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.selected.insert(name.into(), value.into());
    }

    /// Selects `value` only when [`Self::is_option_available`] allows it, the
    /// way the selector ignores clicks on disabled pills. Returns whether the
    /// selection changed hands to `value`.
    pub fn select_if_available(&mut self, name: &str, value: &str) -> bool {
        if !self.is_option_available(name, value) {
            tracing::debug!(option = name, value, "ignoring selection of unavailable value");
            return false;
        }
        self.select_option(name, value);
        true
    }

    #[must_use]
    pub fn is_option_available(&self, name: &str, value: &str) -> bool {
        is_option_value_available(name, value, &self.selected, &self.variants)
    }

    #[must_use]
    pub fn selected_options(&self) -> &SelectedOptions {
        &self.selected
    }

    #[must_use]
    pub fn options(&self) -> &[ProductOption] {
        &self.options
    }

    #[must_use]
    pub fn variants(&self) -> &[ProductVariant] {
        &self.variants
    }

    #[must_use]
    pub fn fingerprint(&self) -> CatalogFingerprint {
        self.fingerprint
    }

    #[must_use]
    pub fn resolved_variant(&self) -> Option<&ProductVariant> {
        resolve_variant(&self.options, &self.variants, &self.selected)
    }

    #[must_use]
    pub fn price(&self) -> Option<&str> {
        self.state().price
    }

    #[must_use]
    pub fn selected_variant_image(&self) -> Option<&Image> {
        self.state().selected_variant_image
    }

    #[must_use]
    pub fn state(&self) -> SelectionState<'_> {
        let resolved_variant = self.resolved_variant();
        SelectionState {
            selected_options: &self.selected,
            resolved_variant,
            price: resolved_variant.map(|v| v.price.amount.as_str()),
            selected_variant_image: resolved_variant.and_then(|v| v.image.as_ref()),
        }
    }

    /// Per-option pills with their selected/available flags, in display order.
    #[must_use]
    pub fn option_groups(&self) -> Vec<OptionGroup> {
        self.options
            .iter()
            .map(|option| {
                let current = self.selected.get(&option.name);
                OptionGroup {
                    name: option.name.clone(),
                    values: option
                        .values
                        .iter()
                        .map(|value| OptionPill {
                            value: value.clone(),
                            selected: current == Some(value),
                            available: self.is_option_available(&option.name, value),
                        })
                        .collect(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;
