//! Catalog data model shared by the variant engine, the Storefront client,
//! the HTTP API, and the CLI.
//!
//! Field names serialize in camelCase so the shapes match the Storefront API
//! payloads they are normalized from (`availableForSale`, `currencyCode`, ...).
//! Products and variants are read-only snapshots for one product view; a new
//! fetch replaces them wholesale.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The shopper's current choice per option, keyed by option name.
///
/// A map enforces at most one selected value per option name.
pub type SelectedOptions = BTreeMap<String, String>;

/// A currency amount exactly as the Storefront API reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Decimal string, e.g. `"19.99"` or `"10.0"`.
    pub amount: String,
    /// ISO 4217 code, e.g. `"USD"`.
    pub currency_code: String,
}

impl Money {
    pub fn new(amount: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency_code: currency_code.into(),
        }
    }

    /// Parses `amount`; `None` when it is not a plain decimal.
    #[must_use]
    pub fn decimal(&self) -> Option<Decimal> {
        self.amount.trim().parse::<Decimal>().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
}

/// A named axis of variation, e.g. `Size` with values `S`, `M`, `L`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    #[serde(default)]
    pub id: Option<String>,
    /// Unique within a product's option set.
    pub name: String,
    /// Display order, not availability order.
    pub values: Vec<String>,
}

impl ProductOption {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

impl SelectedOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A specific purchasable combination of option values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub available_for_sale: bool,
    /// Only populated when the storefront token may read inventory.
    #[serde(default)]
    pub quantity_available: Option<i32>,
    pub price: Money,
    #[serde(default)]
    pub compare_at_price: Option<Money>,
    #[serde(default)]
    pub image: Option<Image>,
    /// One entry per option of the parent product.
    pub selected_options: Vec<SelectedOption>,
}

impl ProductVariant {
    /// The value this variant carries for `option_name`, if any.
    #[must_use]
    pub fn option_value(&self, option_name: &str) -> Option<&str> {
        self.selected_options
            .iter()
            .find(|o| o.name == option_name)
            .map(|o| o.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min_variant_price: Money,
    pub max_variant_price: Money,
}

/// Full product detail as shown in the quick view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_html: String,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured_image: Option<Image>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub options: Vec<ProductOption>,
    pub price_range: PriceRange,
    #[serde(default)]
    pub compare_at_price_range: Option<PriceRange>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// `false` when every variant is sold out; the modal then shows the
    /// product as sold out whatever the selection.
    #[must_use]
    pub fn has_available_variants(&self) -> bool {
        self.variants.iter().any(|v| v.available_for_sale)
    }
}

/// The slice of a product the collection grid needs for one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub featured_image: Option<Image>,
    pub price_range: PriceRange,
    #[serde(default)]
    pub compare_at_price_range: Option<PriceRange>,
    #[serde(default)]
    pub options: Vec<ProductOption>,
    /// Availability of the first variant; `None` when the product has none.
    #[serde(default)]
    pub first_variant_available: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub products: Vec<ProductSummary>,
}

/// Identifies a collection without its products (debug listing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRef {
    pub id: String,
    pub handle: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopInfo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
