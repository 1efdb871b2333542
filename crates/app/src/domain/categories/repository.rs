//! Categories Repository

use sqlx::{PgPool, Postgres, QueryBuilder, query_as, query_scalar};

use crate::{
    domain::{
        categories::models::{Category, CategoryId},
        products::models::Product,
    },
    listing::{PageRequest, ProductSortColumn, SortSpec},
};

const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");
const CHILD_CATEGORIES_SQL: &str = include_str!("sql/child_categories.sql");
const CATEGORY_PRODUCT_IDS_SQL: &str = include_str!("sql/category_product_ids.sql");
const SUBCATEGORY_IDS_SQL: &str = include_str!("sql/subcategory_ids.sql");
const SUBCATEGORY_PRODUCT_IDS_SQL: &str = include_str!("sql/subcategory_product_ids.sql");

const PRODUCTS_BY_IDS_SELECT_SQL: &str = "SELECT p.id, p.name, p.slug, p.short_description, \
     p.full_description, p.status, p.seller_id, p.brand_id, p.created_at, p.updated_at \
     FROM products p WHERE p.id = ANY(";

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCategoriesRepository;

impl PgCategoriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_categories(
        &self,
        pool: &PgPool,
        level: i32,
    ) -> Result<Vec<Category>, sqlx::Error> {
        query_as::<Postgres, Category>(LIST_CATEGORIES_SQL)
            .bind(level)
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn child_categories(
        &self,
        pool: &PgPool,
        parents: Vec<i64>,
    ) -> Result<Vec<Category>, sqlx::Error> {
        query_as::<Postgres, Category>(CHILD_CATEGORIES_SQL)
            .bind(parents)
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn category_product_ids(
        &self,
        pool: &PgPool,
        category: CategoryId,
    ) -> Result<Vec<i64>, sqlx::Error> {
        query_scalar::<Postgres, i64>(CATEGORY_PRODUCT_IDS_SQL)
            .bind(category.get())
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn subcategory_ids(
        &self,
        pool: &PgPool,
        category: CategoryId,
    ) -> Result<Vec<i64>, sqlx::Error> {
        query_scalar::<Postgres, i64>(SUBCATEGORY_IDS_SQL)
            .bind(category.get())
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn product_ids_in_categories(
        &self,
        pool: &PgPool,
        categories: Vec<i64>,
    ) -> Result<Vec<i64>, sqlx::Error> {
        query_scalar::<Postgres, i64>(SUBCATEGORY_PRODUCT_IDS_SQL)
            .bind(categories)
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn products_by_ids(
        &self,
        pool: &PgPool,
        ids: Vec<i64>,
        sort: &SortSpec<ProductSortColumn>,
        page: PageRequest,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let mut query = QueryBuilder::new(PRODUCTS_BY_IDS_SELECT_SQL);

        query.push_bind(ids);
        query.push(")");

        sort.push_order_by(&mut query, "p.id ASC");
        page.push_limit_offset(&mut query);

        query.build_query_as::<Product>().fetch_all(pool).await
    }
}
