//! Storefront GraphQL API response types.
//!
//! ## Observed shape of Storefront API responses
//!
//! ### Envelope
//! Every response is `{ "data": ..., "errors": [...] }`. A query that fails
//! validation returns HTTP 200 with `errors` set and `data` absent or `null`.
//! Partial failures can carry both.
//!
//! ### Missing resources
//! `product(handle:)` and `collection(handle:)` resolve to `null` for unknown
//! handles; this is not an error.
//!
//! ### Connections
//! List fields (`images`, `variants`, `products`, `collections`) are
//! connections. Queries only select `nodes`, so we model them as
//! [`Connection`] and ignore `edges`/`pageInfo`.
//!
//! ### `compareAtPrice` / `compareAtPriceRange`
//! A variant's `compareAtPrice` is `null` when it is not on sale. The product
//! level `compareAtPriceRange` is always present and reports `"0.0"` amounts
//! when nothing is on sale.
//!
//! ### `vendor`
//! Always a string, often empty. Empty is treated as absent during
//! normalization.
//!
//! ### `quantityAvailable`
//! `null` unless the token has the `unauthenticated_read_product_inventory`
//! scope.

use quickview_core::{
    CollectionRef, Image, PriceRange, ProductOption, ProductVariant, ShopInfo,
};
use serde::Deserialize;

/// Top-level GraphQL response.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

/// `data` of `getProductByHandle`.
#[derive(Debug, Deserialize)]
pub struct ProductByHandleData {
    pub product: Option<StorefrontProduct>,
}

/// `data` of `getCollectionProducts`.
#[derive(Debug, Deserialize)]
pub struct CollectionProductsData {
    pub collection: Option<StorefrontCollection>,
}

/// `data` of `getCollections`.
#[derive(Debug, Deserialize)]
pub struct CollectionsData {
    pub collections: Connection<CollectionRef>,
}

/// `data` of `getShop`.
#[derive(Debug, Deserialize)]
pub struct ShopData {
    pub shop: ShopInfo,
}

/// A product as returned by `getProductByHandle`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontProduct {
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
    pub images: Connection<Image>,
    #[serde(default)]
    pub options: Vec<ProductOption>,
    pub price_range: PriceRange,
    #[serde(default)]
    pub compare_at_price_range: Option<PriceRange>,
    #[serde(default)]
    pub variants: Connection<ProductVariant>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontCollection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub products: Connection<StorefrontCollectionProduct>,
}

/// A product node inside `getCollectionProducts`; only the card fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontCollectionProduct {
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
    #[serde(default)]
    pub variants: Connection<VariantAvailability>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantAvailability {
    pub available_for_sale: bool,
}
