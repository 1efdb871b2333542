//! Sort spec parsing against per-entity allow-lists.

use smallvec::SmallVec;
use sqlx::{Postgres, QueryBuilder};
use thiserror::Error;

/// A sortable column set for one entity.
///
/// Implementations map caller-facing field names to safe column references;
/// caller input is never interpolated into SQL directly.
pub trait SortColumn: Copy {
    fn parse(name: &str) -> Option<Self>;

    fn as_sql(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One `field:direction` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<C> {
    pub column: C,
    pub direction: SortDirection,
}

/// An ordered multi-key sort, primary key first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec<C> {
    keys: SmallVec<[SortKey<C>; 2]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortParseError {
    #[error("sort segment `{0}` is not of the form field:asc|desc")]
    MalformedSegment(String),

    #[error("`{0}` is not a sortable field")]
    UnknownField(String),
}

impl<C: SortColumn> SortSpec<C> {
    /// Parse a comma-separated `field:direction` list.
    ///
    /// # Errors
    ///
    /// Returns an error when a segment does not match the
    /// `field:(asc|desc)` grammar or names a field outside the allow-list.
    pub fn parse(input: &str) -> Result<Self, SortParseError> {
        let mut keys = SmallVec::new();

        for segment in input.split(',') {
            let Some((field, direction)) = segment.split_once(':') else {
                return Err(SortParseError::MalformedSegment(segment.to_string()));
            };

            let direction = match direction {
                "asc" => SortDirection::Asc,
                "desc" => SortDirection::Desc,
                _ => return Err(SortParseError::MalformedSegment(segment.to_string())),
            };

            let column =
                C::parse(field).ok_or_else(|| SortParseError::UnknownField(field.to_string()))?;

            keys.push(SortKey { column, direction });
        }

        Ok(Self { keys })
    }

    /// A spec with a single key, used for defaults.
    #[must_use]
    pub fn single(column: C, direction: SortDirection) -> Self {
        let mut keys = SmallVec::new();
        keys.push(SortKey { column, direction });

        Self { keys }
    }

    #[must_use]
    pub fn keys(&self) -> &[SortKey<C>] {
        &self.keys
    }

    /// Append an `ORDER BY` clause, with `tiebreak` as the final key so the
    /// ordering is deterministic even when the requested keys tie.
    pub fn push_order_by(&self, query: &mut QueryBuilder<'_, Postgres>, tiebreak: &'static str) {
        query.push(" ORDER BY ");

        for key in &self.keys {
            query.push(key.column.as_sql());
            query.push(" ");
            query.push(key.direction.as_sql());
            query.push(", ");
        }

        query.push(tiebreak);
    }
}

/// Sortable product columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortColumn {
    Id,
    Name,
    Slug,
    Status,
    CreatedAt,
    UpdatedAt,
}

impl SortColumn for ProductSortColumn {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "slug" => Some(Self::Slug),
            "status" => Some(Self::Status),
            "created_at" => Some(Self::CreatedAt),
            "updated_at" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            Self::Id => "p.id",
            Self::Name => "p.name",
            Self::Slug => "p.slug",
            Self::Status => "p.status",
            Self::CreatedAt => "p.created_at",
            Self::UpdatedAt => "p.updated_at",
        }
    }
}

/// Sortable review columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSortColumn {
    Id,
    Rating,
    HelpfulVotes,
    CreatedAt,
    UpdatedAt,
}

impl SortColumn for ReviewSortColumn {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "rating" => Some(Self::Rating),
            "helpful_votes" => Some(Self::HelpfulVotes),
            "created_at" => Some(Self::CreatedAt),
            "updated_at" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            Self::Id => "r.id",
            Self::Rating => "r.rating",
            Self::HelpfulVotes => "r.helpful_votes",
            Self::CreatedAt => "r.created_at",
            Self::UpdatedAt => "r.updated_at",
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_multi_key_sorts_in_order() -> TestResult {
        let spec = SortSpec::<ProductSortColumn>::parse("created_at:desc,name:asc")?;

        assert_eq!(
            spec.keys(),
            &[
                SortKey {
                    column: ProductSortColumn::CreatedAt,
                    direction: SortDirection::Desc,
                },
                SortKey {
                    column: ProductSortColumn::Name,
                    direction: SortDirection::Asc,
                },
            ]
        );

        Ok(())
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = SortSpec::<ProductSortColumn>::parse("rating:desc");

        assert_eq!(
            result,
            Err(SortParseError::UnknownField("rating".to_string()))
        );
    }

    #[test]
    fn rejects_segments_without_direction() {
        let result = SortSpec::<ProductSortColumn>::parse("name");

        assert_eq!(
            result,
            Err(SortParseError::MalformedSegment("name".to_string()))
        );
    }

    #[test]
    fn rejects_unknown_direction_tokens() {
        let result = SortSpec::<ProductSortColumn>::parse("name:descending");

        assert_eq!(
            result,
            Err(SortParseError::MalformedSegment(
                "name:descending".to_string()
            ))
        );
    }

    #[test]
    fn rating_is_sortable_for_reviews() -> TestResult {
        let spec = SortSpec::<ReviewSortColumn>::parse("rating:desc")?;

        assert_eq!(spec.keys()[0].column, ReviewSortColumn::Rating);

        Ok(())
    }

    #[test]
    fn order_by_uses_allow_listed_columns_and_tiebreak() -> TestResult {
        let spec = SortSpec::<ProductSortColumn>::parse("created_at:desc,slug:asc")?;
        let mut query = QueryBuilder::new("SELECT 1");

        spec.push_order_by(&mut query, "p.id ASC");

        assert_eq!(
            query.sql(),
            "SELECT 1 ORDER BY p.created_at DESC, p.slug ASC, p.id ASC"
        );

        Ok(())
    }
}
