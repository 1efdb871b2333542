//! Main Page Handler

use salvo::prelude::*;

use tracing::error;

use crate::{
    envelope::{ApiError, ApiResult, SuccessResponse},
    extensions::*,
    main_page::responses::MainPageResponse,
};

/// Main Page Handler
///
/// Returns the aggregated homepage payload: newest products, most-reviewed
/// products, and the top level-1 categories.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> ApiResult<MainPageResponse> {
    let state = depot.app_state()?;

    let page = state.main_page.main_page().await.map_err(|source| {
        error!("main page aggregation failure: {source}");

        ApiError::internal()
    })?;

    Ok(Json(SuccessResponse::new(
        page.into(),
        "main page retrieved successfully",
    )))
}
