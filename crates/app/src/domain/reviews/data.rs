//! Reviews Data

use crate::{
    domain::reviews::models::UserId,
    listing::{PageRequest, ReviewSortColumn, SortSpec},
};

/// New Review Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub rating: i16,
    pub title: String,
    pub content: String,
    pub verified_purchase: bool,
    pub user_id: UserId,
}

/// Review Update Data
///
/// Absent fields are left unchanged; `user_id` permits author reassignment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewUpdate {
    pub rating: Option<i16>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub user_id: Option<UserId>,
}

/// Review listing query: page window, multi-key sort, and an optional exact
/// rating filter that applies to the items only, never the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewQuery {
    pub page: PageRequest,
    pub sort: SortSpec<ReviewSortColumn>,
    pub rating: Option<i16>,
}
