//! Update Product Handler

use salvo::prelude::*;

use storefront_app::domain::products::models::ProductId;

use crate::{
    envelope::{ApiError, ApiResult, SuccessResponse},
    extensions::*,
    params,
    products::{
        errors::into_api_error, requests::UpdateProductRequest,
        responses::UpdatedProductResponse,
    },
};

/// Update Product Handler
///
/// Applies a partial update and returns the minimal updated field set.
#[handler]
#[tracing::instrument(name = "products.update", skip(req, depot), err(Debug))]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> ApiResult<UpdatedProductResponse> {
    let state = depot.app_state()?;
    let id: ProductId = params::path_id(req, "id")?;

    let request: UpdateProductRequest = req
        .parse_json()
        .await
        .map_err(|_| ApiError::invalid_input("invalid request body"))?;

    let updated = state
        .products
        .update_product(id, request.into_update()?)
        .await
        .map_err(into_api_error)?;

    tracing::info!(product_id = %id, "updated product");

    Ok(Json(SuccessResponse::new(
        updated.into(),
        "product updated successfully",
    )))
}
