//! Catalog queries on `StorefrontClient`.

use quickview_core::{Collection, CollectionRef, Product, ShopInfo};
use serde_json::json;

use crate::error::StorefrontError;
use crate::normalize::{normalize_collection, normalize_product};
use crate::query::{GET_COLLECTIONS, GET_COLLECTION_PRODUCTS, GET_PRODUCT_BY_HANDLE, GET_SHOP};
use crate::types::{CollectionProductsData, CollectionsData, ProductByHandleData, ShopData};

use super::{StorefrontClient, MAX_PAGE_SIZE};

impl StorefrontClient {
    /// Fetches full product detail for the quick view.
    ///
    /// Returns `Ok(None)` when no product has `handle`.
    ///
    /// # Errors
    ///
    /// Propagates transport and GraphQL errors from the request, and
    /// [`StorefrontError::Normalization`] for malformed variants.
    pub async fn fetch_product_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<Product>, StorefrontError> {
        tracing::debug!(handle, "fetching product");
        let data: ProductByHandleData = self
            .execute(
                "getProductByHandle",
                GET_PRODUCT_BY_HANDLE,
                json!({ "handle": handle }),
            )
            .await?;

        let Some(product) = data.product else {
            tracing::debug!(handle, "product not found");
            return Ok(None);
        };
        normalize_product(product).map(Some)
    }

    /// Fetches the first `limit` product cards of a collection. `limit` is
    /// clamped to `1..=250`.
    ///
    /// Returns `Ok(None)` when no collection has `handle`.
    ///
    /// # Errors
    ///
    /// Propagates transport and GraphQL errors from the request.
    pub async fn fetch_collection(
        &self,
        handle: &str,
        limit: u32,
    ) -> Result<Option<Collection>, StorefrontError> {
        let first = limit.clamp(1, MAX_PAGE_SIZE);
        tracing::debug!(handle, first, "fetching collection products");
        let data: CollectionProductsData = self
            .execute(
                "getCollectionProducts",
                GET_COLLECTION_PRODUCTS,
                json!({ "handle": handle, "first": first }),
            )
            .await?;

        Ok(data.collection.map(normalize_collection))
    }

    /// Lists the shop's first `first` collections (clamped to `1..=250`).
    ///
    /// # Errors
    ///
    /// Propagates transport and GraphQL errors from the request.
    pub async fn fetch_collections(
        &self,
        first: u32,
    ) -> Result<Vec<CollectionRef>, StorefrontError> {
        let first = first.clamp(1, MAX_PAGE_SIZE);
        let data: CollectionsData = self
            .execute("getCollections", GET_COLLECTIONS, json!({ "first": first }))
            .await?;
        Ok(data.collections.nodes)
    }

    /// Fetches the shop's name and description.
    ///
    /// # Errors
    ///
    /// Propagates transport and GraphQL errors from the request.
    pub async fn fetch_shop(&self) -> Result<ShopInfo, StorefrontError> {
        let data: ShopData = self.execute("getShop", GET_SHOP, json!({})).await?;
        Ok(data.shop)
    }
}
