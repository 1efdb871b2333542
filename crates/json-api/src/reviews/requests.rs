//! Review request parsing and validation.

use salvo::Request;
use serde::{Deserialize, Serialize};

use storefront_app::{
    TypedId,
    domain::reviews::data::{NewReview, ReviewQuery, ReviewUpdate},
    listing::ReviewSortColumn,
};

use crate::{envelope::ApiError, params};

/// Parse the review listing query; reviews are always paginated, defaulting
/// to the first page of ten.
pub(crate) fn review_query(req: &Request) -> Result<ReviewQuery, ApiError> {
    Ok(ReviewQuery {
        page: params::pagination_or_default(req)?,
        sort: params::sort_spec(req, ReviewSortColumn::CreatedAt)?,
        rating: opt_rating(req)?,
    })
}

fn opt_rating(req: &Request) -> Result<Option<i16>, ApiError> {
    let Some(raw) = req.query::<String>("rating") else {
        return Ok(None);
    };

    let rating: i16 = raw
        .parse()
        .map_err(|_| ApiError::invalid_input(format!("`{raw}` is not a valid rating")))?;

    validate_rating(rating)?;

    Ok(Some(rating))
}

fn validate_rating(rating: i16) -> Result<(), ApiError> {
    if !(1..=5).contains(&rating) {
        return Err(ApiError::invalid_input("rating must be between 1 and 5"));
    }

    Ok(())
}

/// Create Review Request
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CreateReviewRequest {
    pub rating: i16,
    pub title: String,
    pub content: String,
    pub verified_purchase: bool,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

impl CreateReviewRequest {
    pub(crate) fn into_new_review(self) -> Result<NewReview, ApiError> {
        validate_rating(self.rating)?;

        if self.user_id < 1 {
            return Err(ApiError::invalid_input(
                "userId must be a positive integer",
            ));
        }

        Ok(NewReview {
            rating: self.rating,
            title: self.title,
            content: self.content,
            verified_purchase: self.verified_purchase,
            user_id: TypedId::from_i64(self.user_id),
        })
    }
}

/// Update Review Request
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct UpdateReviewRequest {
    pub rating: Option<i16>,
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
}

impl UpdateReviewRequest {
    pub(crate) fn into_update(self) -> Result<ReviewUpdate, ApiError> {
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }

        if let Some(user_id) = self.user_id {
            if user_id < 1 {
                return Err(ApiError::invalid_input(
                    "userId must be a positive integer",
                ));
            }
        }

        Ok(ReviewUpdate {
            rating: self.rating,
            title: self.title,
            content: self.content,
            user_id: self.user_id.map(TypedId::from_i64),
        })
    }
}
