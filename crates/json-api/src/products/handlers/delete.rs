//! Delete Product Handler

use salvo::prelude::*;

use storefront_app::domain::products::models::ProductId;

use crate::{
    envelope::{ApiResult, SuccessResponse},
    extensions::*,
    params,
    products::errors::into_api_error,
};

/// Delete Product Handler
#[handler]
#[tracing::instrument(name = "products.delete", skip(req, depot), err(Debug))]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> ApiResult<()> {
    let state = depot.app_state()?;
    let id: ProductId = params::path_id(req, "id")?;

    state
        .products
        .delete_product(id)
        .await
        .map_err(into_api_error)?;

    tracing::info!(product_id = %id, "deleted product");

    Ok(Json(SuccessResponse::new(
        (),
        "product deleted successfully",
    )))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use storefront_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_returns_success_envelope() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .withf(|id| id.get() == 7)
            .return_once(|_| Ok(()));

        let body: Value = TestClient::delete("http://example.com/products/7")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"], Value::Null);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_product_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let res = TestClient::delete("http://example.com/products/99")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
