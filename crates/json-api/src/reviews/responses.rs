//! Review response shaping.

use std::collections::BTreeMap;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::Error as DeError,
    ser::SerializeMap,
};

use storefront_app::domain::reviews::models::{
    PageInfo, RatingDistribution, Review, ReviewAuthor, ReviewPage, ReviewSummary,
    ReviewWithAuthor,
};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct AuthorResponse {
    pub id: i64,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl From<ReviewAuthor> for AuthorResponse {
    fn from(author: ReviewAuthor) -> Self {
        Self {
            id: author.id.get(),
            name: author.name,
            avatar_url: author.avatar_url,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ReviewResponse {
    pub id: i64,
    pub product_id: i64,
    pub rating: i16,
    pub title: String,
    pub content: String,
    pub verified_purchase: bool,
    pub helpful_votes: i32,
    pub user: Option<AuthorResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ReviewWithAuthor> for ReviewResponse {
    fn from(item: ReviewWithAuthor) -> Self {
        let mut response = Self::from(item.review);
        response.user = item.author.map(Into::into);
        response
    }
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.get(),
            product_id: review.product_id.get(),
            rating: review.rating,
            title: review.title,
            content: review.content,
            verified_purchase: review.verified_purchase,
            helpful_votes: review.helpful_votes,
            user: None,
            created_at: review.created_at.to_string(),
            updated_at: review.updated_at.to_string(),
        }
    }
}

/// Count per star value, serialized in descending rating order (5 down
/// to 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DistributionResponse([i64; 5]);

impl From<&RatingDistribution> for DistributionResponse {
    fn from(distribution: &RatingDistribution) -> Self {
        let mut counts = [0; 5];

        for (rating, count) in distribution.iter_desc() {
            counts[usize::from(rating as u16) - 1] = count;
        }

        Self(counts)
    }
}

impl Serialize for DistributionResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;

        for rating in (1..=5usize).rev() {
            map.serialize_entry(&rating.to_string(), &self.0[rating - 1])?;
        }

        map.end()
    }
}

impl<'de> Deserialize<'de> for DistributionResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<String, i64>::deserialize(deserializer)?;

        let mut counts = [0; 5];

        for (key, count) in entries {
            let rating: usize = key
                .parse()
                .map_err(|_| DeError::custom("rating keys must be integers"))?;

            if !(1..=5).contains(&rating) {
                return Err(DeError::custom("rating keys must be between 1 and 5"));
            }

            counts[rating - 1] = count;
        }

        Ok(Self(counts))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SummaryResponse {
    pub average_rating: Option<f64>,
    pub total_count: i64,
    pub distribution: DistributionResponse,
}

impl From<ReviewSummary> for SummaryResponse {
    fn from(summary: ReviewSummary) -> Self {
        Self {
            average_rating: summary.average_rating,
            total_count: summary.total_count,
            distribution: DistributionResponse::from(&summary.distribution),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PaginationResponse {
    pub total_items: i64,
    pub total_pages: i64,
    pub current_page: u32,
    pub per_page: u32,
}

impl From<PageInfo> for PaginationResponse {
    fn from(info: PageInfo) -> Self {
        Self {
            total_items: info.total_items,
            total_pages: info.total_pages,
            current_page: info.current_page,
            per_page: info.per_page,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ReviewPageResponse {
    pub items: Vec<ReviewResponse>,
    pub summary: SummaryResponse,
    pub pagination: PaginationResponse,
}

impl From<ReviewPage> for ReviewPageResponse {
    fn from(page: ReviewPage) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            summary: page.summary.into(),
            pagination: page.pagination.into(),
        }
    }
}
