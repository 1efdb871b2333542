//! Product Index Handler

use salvo::prelude::*;

use crate::{
    envelope::{ApiResult, SuccessResponse},
    extensions::*,
    products::{errors::into_api_error, requests, responses::ListingResponse},
};

/// Product Index Handler
///
/// Returns one page of products plus the filter-wide total; without `page`
/// and `perPage` the whole filtered set is returned.
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> ApiResult<ListingResponse> {
    let state = depot.app_state()?;
    let query = requests::listing_query(req)?;
    let page = query.page;

    let listing = state
        .products
        .list_products(query)
        .await
        .map_err(into_api_error)?;

    Ok(Json(SuccessResponse::new(
        ListingResponse::new(listing, page),
        "products retrieved successfully",
    )))
}
