//! Main Page Aggregation

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::MainPageServiceError;
pub use service::*;
