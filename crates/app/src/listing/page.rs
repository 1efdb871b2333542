//! Pagination window calculation.

use sqlx::{Postgres, QueryBuilder};

/// A validated pagination request.
///
/// Both the page number and the page size are required; when a caller omits
/// either one, no `PageRequest` exists and the full result set is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Build a request from boundary-validated values (`page >= 1`,
    /// `per_page >= 1`).
    #[must_use]
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    #[must_use]
    pub fn page(self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn per_page(self) -> u32 {
        self.per_page
    }

    #[must_use]
    pub fn offset(self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.per_page)
    }

    #[must_use]
    pub fn limit(self) -> i64 {
        i64::from(self.per_page)
    }

    /// Number of pages needed to cover `total_items` at this page size.
    #[must_use]
    pub fn total_pages(self, total_items: i64) -> i64 {
        if total_items <= 0 {
            return 0;
        }

        (total_items + self.limit() - 1) / self.limit()
    }

    /// Append `LIMIT`/`OFFSET` clauses with bound parameters.
    pub fn push_limit_offset(self, query: &mut QueryBuilder<'_, Postgres>) {
        query.push(" LIMIT ");
        query.push_bind(self.limit());
        query.push(" OFFSET ");
        query.push_bind(self.offset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_zero_offset() {
        let page = PageRequest::new(1, 10);

        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn offset_scales_with_page_number() {
        let page = PageRequest::new(3, 25);

        assert_eq!(page.offset(), 50);
        assert_eq!(page.limit(), 25);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = PageRequest::new(1, 10);

        assert_eq!(page.total_pages(0), 0);
        assert_eq!(page.total_pages(1), 1);
        assert_eq!(page.total_pages(10), 1);
        assert_eq!(page.total_pages(11), 2);
    }

    #[test]
    fn push_limit_offset_binds_parameters() {
        let mut query = QueryBuilder::new("SELECT 1");

        PageRequest::new(2, 10).push_limit_offset(&mut query);

        assert_eq!(query.sql(), "SELECT 1 LIMIT $1 OFFSET $2");
    }
}
