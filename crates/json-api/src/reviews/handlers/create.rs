//! Create Review Handler

use salvo::prelude::*;

use storefront_app::domain::products::models::ProductId;

use crate::{
    envelope::{ApiError, ApiResult, SuccessResponse},
    extensions::*,
    params,
    reviews::{errors::into_api_error, requests::CreateReviewRequest, responses::ReviewResponse},
};

/// Create Review Handler
///
/// Creates a review on an existing product; the rating is validated here,
/// before anything is persisted.
#[handler]
#[tracing::instrument(name = "reviews.create", skip(req, depot, res), err(Debug))]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> ApiResult<ReviewResponse> {
    let state = depot.app_state()?;
    let product: ProductId = params::path_id(req, "id")?;

    let request: CreateReviewRequest = req
        .parse_json()
        .await
        .map_err(|_| ApiError::invalid_input("invalid request body"))?;

    let review = state
        .reviews
        .create_review(product, request.into_new_review()?)
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    tracing::info!(product_id = %product, review_id = %review.id, "created review");

    Ok(Json(SuccessResponse::new(
        review.into(),
        "review created successfully",
    )))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use storefront_app::domain::reviews::{MockReviewsService, ReviewsServiceError};

    use crate::test_helpers::{make_review, reviews_service};

    use super::*;

    fn make_service(reviews: MockReviewsService) -> Service {
        reviews_service(
            reviews,
            Router::with_path("products/{id}/reviews").post(handler),
        )
    }

    fn request_body(rating: i64) -> Value {
        json!({
            "rating": rating,
            "title": "Great product",
            "content": "Fast delivery, great quality.",
            "verified_purchase": true,
            "userId": 1
        })
    }

    #[tokio::test]
    async fn test_create_review_returns_201() -> TestResult {
        let mut reviews = MockReviewsService::new();

        reviews
            .expect_create_review()
            .once()
            .withf(|product, new| {
                product.get() == 7 && new.rating == 5 && new.user_id.get() == 1
            })
            .return_once(|product, _| Ok(make_review(1, product.get(), 5)));

        let mut res = TestClient::post("http://example.com/products/7/reviews")
            .json(&request_body(5))
            .send(&make_service(reviews))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: Value = res.take_json().await?;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["rating"], 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_review_rating_above_five_is_rejected_before_persistence() -> TestResult {
        // The strict mock guarantees the service is never reached.
        let reviews = MockReviewsService::new();

        let mut res = TestClient::post("http://example.com/products/7/reviews")
            .json(&request_body(6))
            .send(&make_service(reviews))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: Value = res.take_json().await?;

        assert_eq!(body["error"]["code"], "INVALID_INPUT");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_review_rating_below_one_is_rejected() -> TestResult {
        let reviews = MockReviewsService::new();

        let res = TestClient::post("http://example.com/products/7/reviews")
            .json(&request_body(0))
            .send(&make_service(reviews))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_review_unknown_product_returns_404() -> TestResult {
        let mut reviews = MockReviewsService::new();

        reviews
            .expect_create_review()
            .once()
            .return_once(|_, _| Err(ReviewsServiceError::ProductNotFound));

        let mut res = TestClient::post("http://example.com/products/99/reviews")
            .json(&request_body(4))
            .send(&make_service(reviews))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: Value = res.take_json().await?;

        assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");

        Ok(())
    }
}
