//! Delete Review Handler

use salvo::prelude::*;

use storefront_app::domain::{products::models::ProductId, reviews::models::ReviewId};

use crate::{
    envelope::{ApiResult, SuccessResponse},
    extensions::*,
    params,
    reviews::errors::into_api_error,
};

/// Delete Review Handler
#[handler]
#[tracing::instrument(name = "reviews.delete", skip(req, depot), err(Debug))]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> ApiResult<()> {
    let state = depot.app_state()?;
    let product: ProductId = params::path_id(req, "id")?;
    let review: ReviewId = params::path_id(req, "review_id")?;

    state
        .reviews
        .delete_review(product, review)
        .await
        .map_err(into_api_error)?;

    tracing::info!(product_id = %product, review_id = %review, "deleted review");

    Ok(Json(SuccessResponse::new((), "review deleted successfully")))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use storefront_app::domain::reviews::{MockReviewsService, ReviewsServiceError};

    use crate::test_helpers::reviews_service;

    use super::*;

    fn make_service(reviews: MockReviewsService) -> Service {
        reviews_service(
            reviews,
            Router::with_path("products/{id}/reviews/{review_id}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_review_returns_200() -> TestResult {
        let mut reviews = MockReviewsService::new();

        reviews
            .expect_delete_review()
            .once()
            .withf(|product, review| product.get() == 7 && review.get() == 3)
            .return_once(|_, _| Ok(()));

        let res = TestClient::delete("http://example.com/products/7/reviews/3")
            .send(&make_service(reviews))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_review_of_other_product_returns_404() -> TestResult {
        let mut reviews = MockReviewsService::new();

        reviews
            .expect_delete_review()
            .once()
            .return_once(|_, _| Err(ReviewsServiceError::NotFound));

        let res = TestClient::delete("http://example.com/products/8/reviews/3")
            .send(&make_service(reviews))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
