//! Reviews Repository

use sqlx::{PgPool, Postgres, QueryBuilder, query, query_as, query_scalar};

use crate::{
    domain::{
        products::models::ProductId,
        reviews::{
            data::{NewReview, ReviewQuery, ReviewUpdate},
            models::{Review, ReviewId, ReviewWithAuthor},
        },
    },
};

const COUNT_REVIEWS_SQL: &str = include_str!("sql/count_reviews.sql");
const RATING_DISTRIBUTION_SQL: &str = include_str!("sql/rating_distribution.sql");
const GET_REVIEW_SQL: &str = include_str!("sql/get_review.sql");
const CREATE_REVIEW_SQL: &str = include_str!("sql/create_review.sql");
const UPDATE_REVIEW_SQL: &str = include_str!("sql/update_review.sql");
const DELETE_REVIEW_SQL: &str = include_str!("sql/delete_review.sql");
const PRODUCT_EXISTS_SQL: &str = include_str!("sql/product_exists.sql");

const LIST_REVIEWS_SELECT_SQL: &str = "SELECT r.id, r.product_id, r.user_id, r.rating, \
     r.title, r.content, r.verified_purchase, r.helpful_votes, r.created_at, r.updated_at, \
     u.name AS author_name, u.avatar_url AS author_avatar_url \
     FROM reviews r \
     LEFT JOIN users u ON u.id = r.user_id \
     WHERE r.product_id = ";

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReviewsRepository;

impl PgReviewsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn product_exists(
        &self,
        pool: &PgPool,
        product: ProductId,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(PRODUCT_EXISTS_SQL)
            .bind(product.get())
            .fetch_one(pool)
            .await
    }

    pub(crate) async fn count_reviews(
        &self,
        pool: &PgPool,
        product: ProductId,
        rating: Option<i16>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(COUNT_REVIEWS_SQL)
            .bind(product.get())
            .bind(rating)
            .fetch_one(pool)
            .await
    }

    pub(crate) async fn list_reviews(
        &self,
        pool: &PgPool,
        product: ProductId,
        review_query: &ReviewQuery,
    ) -> Result<Vec<ReviewWithAuthor>, sqlx::Error> {
        let mut query = QueryBuilder::new(LIST_REVIEWS_SELECT_SQL);

        query.push_bind(product.get());

        if let Some(rating) = review_query.rating {
            query.push(" AND r.rating = ");
            query.push_bind(rating);
        }

        review_query.sort.push_order_by(&mut query, "r.id ASC");
        review_query.page.push_limit_offset(&mut query);

        query
            .build_query_as::<ReviewWithAuthor>()
            .fetch_all(pool)
            .await
    }

    /// Whole-product rating counts, independent of any rating filter.
    pub(crate) async fn rating_distribution(
        &self,
        pool: &PgPool,
        product: ProductId,
    ) -> Result<Vec<(i16, i64)>, sqlx::Error> {
        query_as::<Postgres, (i16, i64)>(RATING_DISTRIBUTION_SQL)
            .bind(product.get())
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn get_review(
        &self,
        pool: &PgPool,
        review: ReviewId,
    ) -> Result<Review, sqlx::Error> {
        query_as::<Postgres, Review>(GET_REVIEW_SQL)
            .bind(review.get())
            .fetch_one(pool)
            .await
    }

    pub(crate) async fn create_review(
        &self,
        pool: &PgPool,
        product: ProductId,
        new: &NewReview,
    ) -> Result<Review, sqlx::Error> {
        query_as::<Postgres, Review>(CREATE_REVIEW_SQL)
            .bind(product.get())
            .bind(new.user_id.get())
            .bind(new.rating)
            .bind(&new.title)
            .bind(&new.content)
            .bind(new.verified_purchase)
            .fetch_one(pool)
            .await
    }

    pub(crate) async fn update_review(
        &self,
        pool: &PgPool,
        review: ReviewId,
        update: &ReviewUpdate,
    ) -> Result<Review, sqlx::Error> {
        query_as::<Postgres, Review>(UPDATE_REVIEW_SQL)
            .bind(review.get())
            .bind(update.rating)
            .bind(update.title.as_deref())
            .bind(update.content.as_deref())
            .bind(update.user_id.map(|user| user.get()))
            .fetch_one(pool)
            .await
    }

    pub(crate) async fn delete_review(
        &self,
        pool: &PgPool,
        review: ReviewId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_REVIEW_SQL)
            .bind(review.get())
            .execute(pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
