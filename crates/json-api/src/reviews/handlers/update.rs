//! Update Review Handler

use salvo::prelude::*;

use storefront_app::domain::{products::models::ProductId, reviews::models::ReviewId};

use crate::{
    envelope::{ApiError, ApiResult, SuccessResponse},
    extensions::*,
    params,
    reviews::{errors::into_api_error, requests::UpdateReviewRequest, responses::ReviewResponse},
};

/// Update Review Handler
///
/// The review must belong to the path product; a mismatch reads as absence.
#[handler]
#[tracing::instrument(name = "reviews.update", skip(req, depot), err(Debug))]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> ApiResult<ReviewResponse> {
    let state = depot.app_state()?;
    let product: ProductId = params::path_id(req, "id")?;
    let review: ReviewId = params::path_id(req, "review_id")?;

    let request: UpdateReviewRequest = req
        .parse_json()
        .await
        .map_err(|_| ApiError::invalid_input("invalid request body"))?;

    let updated = state
        .reviews
        .update_review(product, review, request.into_update()?)
        .await
        .map_err(into_api_error)?;

    tracing::info!(product_id = %product, review_id = %review, "updated review");

    Ok(Json(SuccessResponse::new(
        updated.into(),
        "review updated successfully",
    )))
}
