//! Review Models

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Row, postgres::PgRow};

use crate::{domain::products::models::ProductId, ids::TypedId, listing::PageRequest};

/// Review ID
pub type ReviewId = TypedId<Review>;

/// User ID
pub type UserId = TypedId<ReviewAuthor>;

/// Review Model
#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_id: Option<UserId>,
    pub rating: i16,
    pub title: String,
    pub content: String,
    pub verified_purchase: bool,
    pub helpful_votes: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The public author fields joined onto a review.
#[derive(Debug, Clone)]
pub struct ReviewAuthor {
    pub id: UserId,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// A review with its author, when the author reference is present.
#[derive(Debug, Clone)]
pub struct ReviewWithAuthor {
    pub review: Review,
    pub author: Option<ReviewAuthor>,
}

/// Review counts per star value, zero-filled over 1..=5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingDistribution {
    counts: [i64; 5],
}

impl RatingDistribution {
    /// Build a distribution from `(rating, count)` rows; ratings outside
    /// 1..=5 are ignored, missing ratings stay at zero.
    #[must_use]
    pub fn from_counts(rows: &[(i16, i64)]) -> Self {
        let mut counts = [0; 5];

        for &(rating, count) in rows {
            if (1..=5).contains(&rating) {
                counts[usize::from(rating as u16) - 1] = count;
            }
        }

        Self { counts }
    }

    #[must_use]
    pub fn count(&self, rating: i16) -> i64 {
        if (1..=5).contains(&rating) {
            self.counts[usize::from(rating as u16) - 1]
        } else {
            0
        }
    }

    /// Total number of reviews across all ratings.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.counts.iter().sum()
    }

    /// Mean rating rounded to two decimals, `None` when there are no
    /// reviews.
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        let total = self.total();

        if total == 0 {
            return None;
        }

        let sum: i64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(index, count)| (index as i64 + 1) * count)
            .sum();

        Some(round2(sum as f64 / total as f64))
    }

    /// Buckets in descending rating order, 5 down to 1.
    pub fn iter_desc(&self) -> impl Iterator<Item = (i16, i64)> + '_ {
        (1..=5i16).rev().map(|rating| (rating, self.count(rating)))
    }
}

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Whole-product review summary, independent of any rating filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSummary {
    pub average_rating: Option<f64>,
    pub total_count: i64,
    pub distribution: RatingDistribution,
}

impl From<RatingDistribution> for ReviewSummary {
    fn from(distribution: RatingDistribution) -> Self {
        Self {
            average_rating: distribution.average(),
            total_count: distribution.total(),
            distribution,
        }
    }
}

/// Pagination facts for the current filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub total_items: i64,
    pub total_pages: i64,
    pub current_page: u32,
    pub per_page: u32,
}

impl PageInfo {
    #[must_use]
    pub fn new(total_items: i64, page: PageRequest) -> Self {
        Self {
            total_items,
            total_pages: page.total_pages(total_items),
            current_page: page.page(),
            per_page: page.per_page(),
        }
    }
}

/// One page of reviews with the whole-product summary.
#[derive(Debug, Clone)]
pub struct ReviewPage {
    pub items: Vec<ReviewWithAuthor>,
    pub summary: ReviewSummary,
    pub pagination: PageInfo,
}

impl<'r> FromRow<'r, PgRow> for Review {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ReviewId::from_i64(row.try_get("id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            user_id: row
                .try_get::<Option<i64>, _>("user_id")?
                .map(UserId::from_i64),
            rating: row.try_get("rating")?,
            title: row.try_get("title")?,
            content: row.try_get("content")?,
            verified_purchase: row.try_get("verified_purchase")?,
            helpful_votes: row.try_get("helpful_votes")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ReviewWithAuthor {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let review = Review::from_row(row)?;

        let author_name: Option<String> = row.try_get("author_name")?;

        let author = review.user_id.zip(author_name).map(|(id, name)| {
            Ok::<_, sqlx::Error>(ReviewAuthor {
                id,
                name,
                avatar_url: row.try_get("author_avatar_url")?,
            })
        });

        let author = author.transpose()?;

        Ok(Self { review, author })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_zero_fills_missing_ratings() {
        // Ratings [5, 5, 4, 3]
        let distribution = RatingDistribution::from_counts(&[(5, 2), (4, 1), (3, 1)]);

        let buckets: Vec<(i16, i64)> = distribution.iter_desc().collect();

        assert_eq!(buckets, vec![(5, 2), (4, 1), (3, 1), (2, 0), (1, 0)]);
    }

    #[test]
    fn distribution_sums_to_total() {
        let distribution = RatingDistribution::from_counts(&[(1, 3), (2, 1), (5, 6)]);

        assert_eq!(distribution.total(), 10);
        assert_eq!(
            distribution.iter_desc().map(|(_, count)| count).sum::<i64>(),
            distribution.total()
        );
    }

    #[test]
    fn average_is_rounded_to_two_decimals() {
        let distribution = RatingDistribution::from_counts(&[(5, 2), (4, 1), (3, 1)]);

        assert_eq!(distribution.average(), Some(4.25));
    }

    #[test]
    fn average_of_repeating_decimal_rounds() {
        // [5, 4, 4] -> 4.333... -> 4.33
        let distribution = RatingDistribution::from_counts(&[(5, 1), (4, 2)]);

        assert_eq!(distribution.average(), Some(4.33));
    }

    #[test]
    fn average_is_none_with_no_reviews() {
        let distribution = RatingDistribution::from_counts(&[]);

        assert_eq!(distribution.average(), None);
        assert_eq!(distribution.total(), 0);
    }

    #[test]
    fn out_of_range_ratings_are_ignored() {
        let distribution = RatingDistribution::from_counts(&[(0, 4), (6, 2), (3, 1)]);

        assert_eq!(distribution.total(), 1);
    }

    #[test]
    fn page_info_uses_filtered_total_for_page_count() {
        let info = PageInfo::new(11, PageRequest::new(2, 5));

        assert_eq!(info.total_items, 11);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.current_page, 2);
        assert_eq!(info.per_page, 5);
    }
}
