use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::FilterKind;
use crate::domain::product::query::RawProductQuery;
use crate::domain::product::use_cases::get_all::ProductPage;

pub struct FilterProductsParams {
    pub kind: FilterKind,
    pub query: RawProductQuery,
}

#[async_trait]
pub trait FilterProductsUseCase: Send + Sync {
    async fn execute(&self, params: FilterProductsParams) -> Result<ProductPage, ProductError>;
}
