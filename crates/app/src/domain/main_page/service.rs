//! Main page service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::main_page::{
        errors::MainPageServiceError, models::MainPage, repository::PgMainPageRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgMainPageService {
    db: Db,
    repository: PgMainPageRepository,
}

impl PgMainPageService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgMainPageRepository::new(),
        }
    }
}

#[async_trait]
impl MainPageService for PgMainPageService {
    async fn main_page(&self) -> Result<MainPage, MainPageServiceError> {
        let pool = self.db.pool();

        // Three independent reads with no cross-query transaction.
        let (new_products, popular_products, featured_categories) = tokio::try_join!(
            self.repository.new_products(pool),
            self.repository.popular_products(pool),
            self.repository.top_categories(pool),
        )?;

        Ok(MainPage {
            new_products,
            popular_products,
            featured_categories,
        })
    }
}

#[automock]
#[async_trait]
pub trait MainPageService: Send + Sync {
    /// Retrieve the aggregated homepage payload.
    async fn main_page(&self) -> Result<MainPage, MainPageServiceError>;
}
