//! Main page service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MainPageServiceError {
    #[error("storage error")]
    Sql(#[from] Error),
}
