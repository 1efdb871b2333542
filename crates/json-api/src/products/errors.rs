//! Product Errors

use tracing::error;

use storefront_app::domain::products::ProductsServiceError;

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::AlreadyExists => ApiError::conflict("product already exists"),
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => ApiError::invalid_input("invalid product payload"),
        ProductsServiceError::NotFound => ApiError::not_found("product not found"),
        ProductsServiceError::Sql(source) => {
            error!("products storage failure: {source}");

            ApiError::internal()
        }
    }
}
