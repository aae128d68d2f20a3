use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use quickview_core::CollectionRef;
use quickview_variants::ProductCard;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_storefront_error, normalize_limit, ApiError, ApiResponse, AppState};

/// Collections listed by the debug route.
const DEBUG_COLLECTION_COUNT: u32 = 10;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CollectionGrid {
    id: String,
    handle: String,
    title: String,
    description: String,
    cards: Vec<ProductCard>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CollectionQuery {
    pub limit: Option<u32>,
}

pub(super) async fn get_collection(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(handle): Path<String>,
    Query(query): Query<CollectionQuery>,
) -> Result<Json<ApiResponse<CollectionGrid>>, ApiError> {
    load_grid(&state, req_id, handle, query.limit).await
}

/// The configured storefront collection (`QUICKVIEW_COLLECTION_HANDLE`).
pub(super) async fn get_default_collection(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<CollectionQuery>,
) -> Result<Json<ApiResponse<CollectionGrid>>, ApiError> {
    let handle = state.collection_handle.clone();
    load_grid(&state, req_id, handle, query.limit).await
}

async fn load_grid(
    state: &AppState,
    req_id: RequestId,
    handle: String,
    limit: Option<u32>,
) -> Result<Json<ApiResponse<CollectionGrid>>, ApiError> {
    let limit = normalize_limit(limit, state.collection_limit);
    let collection = state
        .client
        .fetch_collection(&handle, limit)
        .await
        .map_err(|e| map_storefront_error(req_id.0.clone(), &e, "collection"))?
        .ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "not_found",
                format!("Collection with handle \"{handle}\" not found"),
            )
        })?;

    let grid = CollectionGrid {
        id: collection.id,
        handle,
        title: collection.title,
        description: collection.description,
        cards: collection
            .products
            .iter()
            .map(ProductCard::from_summary)
            .collect(),
    };
    Ok(Json(ApiResponse::new(grid, req_id.0)))
}

pub(super) async fn list_collections(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<CollectionRef>>>, ApiError> {
    let collections = state
        .client
        .fetch_collections(DEBUG_COLLECTION_COUNT)
        .await
        .map_err(|e| map_storefront_error(req_id.0.clone(), &e, "collections"))?;
    Ok(Json(ApiResponse::new(collections, req_id.0)))
}
