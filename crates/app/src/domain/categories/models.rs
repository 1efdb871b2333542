//! Category Models

use sqlx::{FromRow, Row, postgres::PgRow};

use crate::ids::TypedId;

/// Category ID
pub type CategoryId = TypedId<Category>;

/// Category Model
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub level: i32,
    pub parent_id: Option<CategoryId>,
    pub image_url: Option<String>,
}

/// A category together with its direct children.
#[derive(Debug, Clone)]
pub struct CategoryWithChildren {
    pub category: Category,
    pub children: Vec<Category>,
}

impl<'r> FromRow<'r, PgRow> for Category {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CategoryId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            level: row.try_get("level")?,
            parent_id: row
                .try_get::<Option<i64>, _>("parent_id")?
                .map(CategoryId::from_i64),
            image_url: row.try_get("image_url")?,
        })
    }
}
