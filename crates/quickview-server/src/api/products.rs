use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use quickview_core::{Image, Product, ProductVariant, SelectedOptions};
use quickview_variants::{
    can_add_to_bag, compare_at_display, display_price, gallery_images, OptionGroup,
    VariantSelection,
};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{map_storefront_error, ApiError, ApiResponse, AppState};

/// What the quick view modal renders for one selection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SelectionView {
    handle: String,
    selected_options: SelectedOptions,
    resolved_variant: Option<ProductVariant>,
    /// Decimal amount of the resolved variant's price.
    price: Option<String>,
    display_price: String,
    compare_at_price: Option<String>,
    can_add_to_bag: bool,
    selected_variant_image: Option<Image>,
    gallery: Vec<Image>,
    option_groups: Vec<OptionGroup>,
    /// Query parameters that did not name an option of the product.
    ignored_params: Vec<String>,
}

impl SelectionView {
    fn build(product: &Product, overrides: BTreeMap<String, String>) -> Self {
        let mut selection = VariantSelection::for_product(product);
        let mut ignored_params = Vec::new();

        for (name, value) in overrides {
            if product.options.iter().any(|o| o.name == name) {
                selection.select_option(name, value);
            } else {
                ignored_params.push(name);
            }
        }

        let state = selection.state();
        let display = display_price(product, state.resolved_variant);
        let compare_at_price = compare_at_display(product, state.resolved_variant, &display);

        Self {
            handle: product.handle.clone(),
            selected_options: state.selected_options.clone(),
            resolved_variant: state.resolved_variant.cloned(),
            price: state.price.map(str::to_owned),
            display_price: display,
            compare_at_price,
            can_add_to_bag: can_add_to_bag(state.resolved_variant),
            selected_variant_image: state.selected_variant_image.cloned(),
            gallery: gallery_images(product, state.selected_variant_image)
                .into_iter()
                .cloned()
                .collect(),
            option_groups: selection.option_groups(),
            ignored_params,
        }
    }
}

async fn load_product(
    state: &AppState,
    req_id: &RequestId,
    handle: &str,
) -> Result<Product, ApiError> {
    state
        .client
        .fetch_product_by_handle(handle)
        .await
        .map_err(|e| map_storefront_error(req_id.0.clone(), &e, "product"))?
        .ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "not_found",
                format!("Product with handle \"{handle}\" not found"),
            )
        })
}

pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(handle): Path<String>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let product = load_product(&state, &req_id, &handle).await?;
    Ok(Json(ApiResponse::new(product, req_id.0)))
}

/// Resolves a selection server-side: defaults, then one override per query
/// parameter naming an option (`?Size=M&Color=Blue`).
pub(super) async fn get_selection(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(handle): Path<String>,
    Query(overrides): Query<BTreeMap<String, String>>,
) -> Result<Json<ApiResponse<SelectionView>>, ApiError> {
    let product = load_product(&state, &req_id, &handle).await?;
    let view = SelectionView::build(&product, overrides);
    tracing::debug!(
        handle = %handle,
        resolved = view.resolved_variant.is_some(),
        can_add_to_bag = view.can_add_to_bag,
        "resolved selection"
    );
    Ok(Json(ApiResponse::new(view, req_id.0)))
}
