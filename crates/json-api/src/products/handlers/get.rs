//! Get Product Handler

use salvo::prelude::*;

use storefront_app::domain::products::models::ProductId;

use crate::{
    envelope::{ApiResult, SuccessResponse},
    extensions::*,
    params,
    products::{errors::into_api_error, responses::ProductResponse},
};

/// Get Product Handler
///
/// Returns a product with its relations.
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> ApiResult<ProductResponse> {
    let state = depot.app_state()?;
    let id: ProductId = params::path_id(req, "id")?;

    let product = state
        .products
        .get_product(id)
        .await
        .map_err(into_api_error)?;

    Ok(Json(SuccessResponse::new(
        product.into(),
        "product retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use storefront_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::{make_detail, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(|id| id.get() == 7)
            .return_once(|id| Ok(make_detail(id)));

        let response: crate::envelope::SuccessResponse<ProductResponse> =
            TestClient::get("http://example.com/products/7")
                .send(&make_service(products))
                .await
                .take_json()
                .await?;

        assert!(response.success, "expected success envelope");
        assert_eq!(response.data.id, 7);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/products/99")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: Value = res.take_json().await?;

        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_returns_400() -> TestResult {
        let products = MockProductsService::new();

        let mut res = TestClient::get("http://example.com/products/abc")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: Value = res.take_json().await?;

        assert_eq!(body["error"]["code"], "INVALID_INPUT");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_zero_id_returns_400() -> TestResult {
        let products = MockProductsService::new();

        let res = TestClient::get("http://example.com/products/0")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
