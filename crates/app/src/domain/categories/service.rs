//! Categories service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;

use crate::{
    database::Db,
    domain::{
        categories::{
            data::CategoryProductsQuery,
            errors::CategoriesServiceError,
            models::{Category, CategoryId, CategoryWithChildren},
            repository::PgCategoriesRepository,
        },
        products::models::Product,
    },
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn list_categories(
        &self,
        level: i32,
    ) -> Result<Vec<CategoryWithChildren>, CategoriesServiceError> {
        let pool = self.db.pool();

        let categories = self.repository.list_categories(pool, level).await?;

        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let parent_ids: Vec<i64> = categories.iter().map(|category| category.id.get()).collect();

        let children = self.repository.child_categories(pool, parent_ids).await?;

        let mut children_by_parent: FxHashMap<i64, Vec<Category>> = FxHashMap::default();

        for child in children {
            if let Some(parent) = child.parent_id {
                children_by_parent
                    .entry(parent.get())
                    .or_default()
                    .push(child);
            }
        }

        Ok(categories
            .into_iter()
            .map(|category| CategoryWithChildren {
                children: children_by_parent
                    .remove(&category.id.get())
                    .unwrap_or_default(),
                category,
            })
            .collect())
    }

    async fn category_products(
        &self,
        category: CategoryId,
        query: CategoryProductsQuery,
    ) -> Result<Vec<Product>, CategoriesServiceError> {
        let pool = self.db.pool();

        let mut product_ids = self.repository.category_product_ids(pool, category).await?;

        // Direct children only; the category tree carries no cycle guard, so
        // descendant traversal is bounded to depth one.
        if query.include_subcategories {
            let subcategories = self.repository.subcategory_ids(pool, category).await?;

            if !subcategories.is_empty() {
                let subcategory_products = self
                    .repository
                    .product_ids_in_categories(pool, subcategories)
                    .await?;

                product_ids.extend(subcategory_products);
            }
        }

        product_ids.sort_unstable();
        product_ids.dedup();

        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let products = self
            .repository
            .products_by_ids(pool, product_ids, &query.sort, query.page)
            .await?;

        Ok(products)
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieve the categories at a level, each with its direct children.
    async fn list_categories(
        &self,
        level: i32,
    ) -> Result<Vec<CategoryWithChildren>, CategoriesServiceError>;

    /// Retrieve a sorted page of the products assigned to a category,
    /// optionally including its direct subcategories.
    async fn category_products(
        &self,
        category: CategoryId,
        query: CategoryProductsQuery,
    ) -> Result<Vec<Product>, CategoriesServiceError>;
}
