//! Category Index Handler

use salvo::prelude::*;

use crate::{
    categories::{errors::into_api_error, requests, responses::CategoryWithChildrenResponse},
    envelope::{ApiResult, SuccessResponse},
    extensions::*,
};

/// Category Index Handler
///
/// Returns the categories at the requested level with their direct
/// children.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> ApiResult<Vec<CategoryWithChildrenResponse>> {
    let state = depot.app_state()?;
    let level = requests::level(req)?;

    let categories = state
        .categories
        .list_categories(level)
        .await
        .map_err(into_api_error)?;

    Ok(Json(SuccessResponse::new(
        categories.into_iter().map(Into::into).collect(),
        "categories retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use storefront_app::domain::categories::{
        MockCategoriesService, models::CategoryWithChildren,
    };

    use crate::test_helpers::{categories_service, make_category};

    use super::*;

    fn make_service(categories: MockCategoriesService) -> Service {
        categories_service(categories, Router::with_path("categories").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_categories_with_children() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_list_categories()
            .once()
            .withf(|level| *level == 1)
            .return_once(|_| {
                Ok(vec![CategoryWithChildren {
                    category: make_category(1, 1, None),
                    children: vec![make_category(2, 2, Some(1))],
                }])
            });

        let body: Value = TestClient::get("http://example.com/categories?level=1")
            .send(&make_service(categories))
            .await
            .take_json()
            .await?;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["id"], 1);
        assert_eq!(body["data"][0]["children"][0]["id"], 2);
        assert_eq!(body["data"][0]["children"][0]["parent_id"], 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_missing_level_returns_400() -> TestResult {
        let categories = MockCategoriesService::new();

        let mut res = TestClient::get("http://example.com/categories")
            .send(&make_service(categories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: Value = res.take_json().await?;

        assert_eq!(body["error"]["code"], "INVALID_INPUT");

        Ok(())
    }
}
