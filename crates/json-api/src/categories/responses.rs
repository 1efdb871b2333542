//! Category response shaping.

use serde::{Deserialize, Serialize};

use storefront_app::domain::categories::models::{Category, CategoryWithChildren};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub level: i32,
    pub parent_id: Option<i64>,
    pub image_url: Option<String>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.get(),
            name: category.name,
            slug: category.slug,
            level: category.level,
            parent_id: category.parent_id.map(|id| id.get()),
            image_url: category.image_url,
        }
    }
}

/// A category with its direct children inlined.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CategoryWithChildrenResponse {
    #[serde(flatten)]
    pub category: CategoryResponse,
    pub children: Vec<CategoryResponse>,
}

impl From<CategoryWithChildren> for CategoryWithChildrenResponse {
    fn from(entry: CategoryWithChildren) -> Self {
        Self {
            category: entry.category.into(),
            children: entry.children.into_iter().map(Into::into).collect(),
        }
    }
}
