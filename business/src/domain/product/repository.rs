use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Source of the product catalog. Every call returns a fresh, ordered
/// snapshot of all products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
}
