//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        categories::{CategoriesService, PgCategoriesService},
        main_page::{MainPageService, PgMainPageService},
        products::{PgProductsService, ProductsService},
        reviews::{PgReviewsService, ReviewsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// The wired-up services, one handle per domain, sharing a single `Db`.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub categories: Arc<dyn CategoriesService>,
    pub reviews: Arc<dyn ReviewsService>,
    pub main_page: Arc<dyn MainPageService>,
    db: Db,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            categories: Arc::new(PgCategoriesService::new(db.clone())),
            reviews: Arc::new(PgReviewsService::new(db.clone())),
            main_page: Arc::new(PgMainPageService::new(db.clone())),
            db,
        })
    }

    /// Close the underlying connection pool.
    pub async fn close(&self) {
        self.db.close().await;
    }
}
