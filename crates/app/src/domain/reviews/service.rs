//! Reviews service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        products::models::ProductId,
        reviews::{
            data::{NewReview, ReviewQuery, ReviewUpdate},
            errors::ReviewsServiceError,
            models::{PageInfo, RatingDistribution, Review, ReviewId, ReviewPage, ReviewSummary},
            repository::PgReviewsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgReviewsService {
    db: Db,
    repository: PgReviewsRepository,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReviewsRepository::new(),
        }
    }

    /// The review's product link must match the path product; a mismatch is
    /// indistinguishable from absence.
    async fn get_owned_review(
        &self,
        product: ProductId,
        review: ReviewId,
    ) -> Result<Review, ReviewsServiceError> {
        let review = self.repository.get_review(self.db.pool(), review).await?;

        if review.product_id != product {
            return Err(ReviewsServiceError::NotFound);
        }

        Ok(review)
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    async fn product_reviews(
        &self,
        product: ProductId,
        query: ReviewQuery,
    ) -> Result<ReviewPage, ReviewsServiceError> {
        let pool = self.db.pool();

        // The filtered count drives pagination; the distribution covers the
        // whole product regardless of the rating filter.
        let (total_items, items, distribution_rows) = tokio::try_join!(
            self.repository.count_reviews(pool, product, query.rating),
            self.repository.list_reviews(pool, product, &query),
            self.repository.rating_distribution(pool, product),
        )?;

        let distribution = RatingDistribution::from_counts(&distribution_rows);

        Ok(ReviewPage {
            items,
            summary: ReviewSummary::from(distribution),
            pagination: PageInfo::new(total_items, query.page),
        })
    }

    async fn create_review(
        &self,
        product: ProductId,
        new: NewReview,
    ) -> Result<Review, ReviewsServiceError> {
        let pool = self.db.pool();

        if !self.repository.product_exists(pool, product).await? {
            return Err(ReviewsServiceError::ProductNotFound);
        }

        let review = self.repository.create_review(pool, product, &new).await?;

        tracing::debug!(product_id = %product, review_id = %review.id, "created review");

        Ok(review)
    }

    async fn update_review(
        &self,
        product: ProductId,
        review: ReviewId,
        update: ReviewUpdate,
    ) -> Result<Review, ReviewsServiceError> {
        self.get_owned_review(product, review).await?;

        let updated = self
            .repository
            .update_review(self.db.pool(), review, &update)
            .await?;

        Ok(updated)
    }

    async fn delete_review(
        &self,
        product: ProductId,
        review: ReviewId,
    ) -> Result<(), ReviewsServiceError> {
        self.get_owned_review(product, review).await?;

        let rows_affected = self
            .repository
            .delete_review(self.db.pool(), review)
            .await?;

        if rows_affected == 0 {
            return Err(ReviewsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Retrieve a page of reviews for a product with the whole-product
    /// rating summary.
    async fn product_reviews(
        &self,
        product: ProductId,
        query: ReviewQuery,
    ) -> Result<ReviewPage, ReviewsServiceError>;

    /// Create a review on an existing product.
    async fn create_review(
        &self,
        product: ProductId,
        new: NewReview,
    ) -> Result<Review, ReviewsServiceError>;

    /// Update a review belonging to the given product.
    async fn update_review(
        &self,
        product: ProductId,
        review: ReviewId,
        update: ReviewUpdate,
    ) -> Result<Review, ReviewsServiceError>;

    /// Delete a review belonging to the given product.
    async fn delete_review(
        &self,
        product: ProductId,
        review: ReviewId,
    ) -> Result<(), ReviewsServiceError>;
}
