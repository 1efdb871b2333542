//! Category Products Handler

use salvo::prelude::*;

use storefront_app::domain::categories::models::CategoryId;

use crate::{
    categories::{errors::into_api_error, requests},
    envelope::{ApiResult, SuccessResponse},
    extensions::*,
    params,
    products::responses::ProductSummaryResponse,
};

/// Category Products Handler
///
/// Returns a sorted page of the products assigned to a category, including
/// its direct subcategories unless opted out.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> ApiResult<Vec<ProductSummaryResponse>> {
    let state = depot.app_state()?;
    let category: CategoryId = params::path_id(req, "id")?;
    let query = requests::category_products_query(req)?;

    let products = state
        .categories
        .category_products(category, query)
        .await
        .map_err(into_api_error)?;

    Ok(Json(SuccessResponse::new(
        products.into_iter().map(Into::into).collect(),
        "category products retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use storefront_app::domain::categories::MockCategoriesService;

    use crate::test_helpers::{categories_service, make_product};

    use super::*;

    fn make_service(categories: MockCategoriesService) -> Service {
        categories_service(
            categories,
            Router::with_path("categories/{id}/products").get(handler),
        )
    }

    #[tokio::test]
    async fn test_products_default_to_first_page_with_subcategories() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_category_products()
            .once()
            .withf(|category, query| {
                category.get() == 3
                    && query.include_subcategories
                    && query.page.page() == 1
                    && query.page.per_page() == 10
            })
            .return_once(|_, _| Ok(vec![make_product(storefront_app::TypedId::from_i64(5))]));

        let body: Value = TestClient::get("http://example.com/categories/3/products")
            .send(&make_service(categories))
            .await
            .take_json()
            .await?;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["id"], 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_products_can_exclude_subcategories() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_category_products()
            .once()
            .withf(|_, query| !query.include_subcategories)
            .return_once(|_, _| Ok(vec![]));

        let res = TestClient::get(
            "http://example.com/categories/3/products?includeSubcategories=false",
        )
        .send(&make_service(categories))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_products_non_numeric_category_id_returns_400() -> TestResult {
        let categories = MockCategoriesService::new();

        let res = TestClient::get("http://example.com/categories/abc/products")
            .send(&make_service(categories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
