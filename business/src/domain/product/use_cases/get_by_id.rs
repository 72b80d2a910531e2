use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetProductByIdParams {
    /// Path segment as received, validated by the use case.
    pub product_id: String,
}

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    /// `Ok(None)` means the id passed the range check but no product carries it.
    async fn execute(&self, params: GetProductByIdParams) -> Result<Option<Product>, ProductError>;
}
