//! Review Errors

use tracing::error;

use storefront_app::domain::reviews::ReviewsServiceError;

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: ReviewsServiceError) -> ApiError {
    match error {
        ReviewsServiceError::NotFound => ApiError::not_found("review not found"),
        ReviewsServiceError::ProductNotFound => ApiError::not_found("product not found"),
        ReviewsServiceError::InvalidReference
        | ReviewsServiceError::MissingRequiredData
        | ReviewsServiceError::InvalidData => ApiError::invalid_input("invalid review payload"),
        ReviewsServiceError::Sql(source) => {
            error!("reviews storage failure: {source}");

            ApiError::internal()
        }
    }
}
