//! Review Index Handler

use salvo::prelude::*;

use storefront_app::domain::products::models::ProductId;

use crate::{
    envelope::{ApiResult, SuccessResponse},
    extensions::*,
    params,
    reviews::{errors::into_api_error, requests, responses::ReviewPageResponse},
};

/// Review Index Handler
///
/// Returns a page of reviews plus the whole-product rating summary; the
/// `rating` filter narrows the items and the pagination, never the summary.
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> ApiResult<ReviewPageResponse> {
    let state = depot.app_state()?;
    let product: ProductId = params::path_id(req, "id")?;
    let query = requests::review_query(req)?;

    let page = state
        .reviews
        .product_reviews(product, query)
        .await
        .map_err(into_api_error)?;

    Ok(Json(SuccessResponse::new(
        page.into(),
        "reviews retrieved successfully",
    )))
}
