//! Create Product Handler

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    envelope::{ApiError, ApiResult, SuccessResponse},
    extensions::*,
    products::{errors::into_api_error, requests::CreateProductRequest, responses::ProductResponse},
};

/// Create Product Handler
///
/// Creates a product with its category links and optional initial price.
#[handler]
#[tracing::instrument(name = "products.create", skip(req, depot, res), err(Debug))]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> ApiResult<ProductResponse> {
    let state = depot.app_state()?;

    let request: CreateProductRequest = req
        .parse_json()
        .await
        .map_err(|_| ApiError::invalid_input("invalid request body"))?;

    let created = state
        .products
        .create_product(request.into_new_product()?)
        .await
        .map_err(into_api_error)?;

    let id = created.product.id;

    res.add_header(LOCATION, format!("/products/{id}"), true)
        .or_internal("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_id = %id, "created product");

    Ok(Json(SuccessResponse::new(
        created.into(),
        "product created successfully",
    )))
}
