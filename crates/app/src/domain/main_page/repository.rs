//! Main Page Repository

use sqlx::{PgPool, Postgres, query_as};

use crate::domain::main_page::models::{CategoryCard, ProductCard, ProductCardRow};

const NEW_PRODUCTS_SQL: &str = include_str!("sql/new_products.sql");
const POPULAR_PRODUCTS_SQL: &str = include_str!("sql/popular_products.sql");
const TOP_CATEGORIES_SQL: &str = include_str!("sql/top_categories.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgMainPageRepository;

impl PgMainPageRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn new_products(&self, pool: &PgPool) -> Result<Vec<ProductCard>, sqlx::Error> {
        Self::fetch_cards(pool, NEW_PRODUCTS_SQL).await
    }

    pub(crate) async fn popular_products(
        &self,
        pool: &PgPool,
    ) -> Result<Vec<ProductCard>, sqlx::Error> {
        Self::fetch_cards(pool, POPULAR_PRODUCTS_SQL).await
    }

    pub(crate) async fn top_categories(
        &self,
        pool: &PgPool,
    ) -> Result<Vec<CategoryCard>, sqlx::Error> {
        query_as::<Postgres, CategoryCard>(TOP_CATEGORIES_SQL)
            .fetch_all(pool)
            .await
    }

    /// Both product lists go through the same row-to-card mapping.
    async fn fetch_cards(pool: &PgPool, sql: &str) -> Result<Vec<ProductCard>, sqlx::Error> {
        let rows = query_as::<Postgres, ProductCardRow>(sql)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(ProductCard::from).collect())
    }
}
