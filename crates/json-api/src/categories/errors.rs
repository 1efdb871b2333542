//! Category Errors

use tracing::error;

use storefront_app::domain::categories::CategoriesServiceError;

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: CategoriesServiceError) -> ApiError {
    match error {
        CategoriesServiceError::NotFound => ApiError::not_found("category not found"),
        CategoriesServiceError::Sql(source) => {
            error!("categories storage failure: {source}");

            ApiError::internal()
        }
    }
}
