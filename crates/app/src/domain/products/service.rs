//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductListing, ProductQuery, ProductUpdate, UpdatedProduct},
        errors::ProductsServiceError,
        models::{ProductDetail, ProductId},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        query: ProductQuery,
    ) -> Result<ProductListing, ProductsServiceError> {
        let pool = self.db.pool();

        // The count and the page observe the same filter but are independent
        // reads; minor staleness between them is accepted.
        let (total, rows) = tokio::try_join!(
            self.repository.count_products(pool, &query.filter),
            self.repository
                .list_product_rows(pool, &query.filter, &query.sort, query.page),
        )?;

        let data = self.repository.load_details(pool, rows).await?;

        Ok(ProductListing { total, data })
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductDetail, ProductsServiceError> {
        let pool = self.db.pool();

        let row = self.repository.get_product_row(pool, product).await?;

        let mut details = self.repository.load_details(pool, vec![row]).await?;

        details.pop().ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(
        &self,
        new: NewProduct,
    ) -> Result<ProductDetail, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let id = self.repository.create_product(&mut tx, &new).await?;

        tx.commit().await?;

        tracing::debug!(product_id = %id, categories = new.categories.len(), "created product");

        self.get_product(id).await
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<UpdatedProduct, ProductsServiceError> {
        let updated = self
            .repository
            .update_product(self.db.pool(), product, &update)
            .await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        let rows_affected = self
            .repository
            .delete_product(self.db.pool(), product)
            .await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieve one page of products plus the filter-wide total.
    async fn list_products(
        &self,
        query: ProductQuery,
    ) -> Result<ProductListing, ProductsServiceError>;

    /// Retrieve a single product with its relations.
    async fn get_product(&self, product: ProductId)
    -> Result<ProductDetail, ProductsServiceError>;

    /// Create a product with its category links and optional initial price.
    async fn create_product(&self, new: NewProduct)
    -> Result<ProductDetail, ProductsServiceError>;

    /// Apply a partial update, returning the minimal updated field set.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<UpdatedProduct, ProductsServiceError>;

    /// Delete a product.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}
