use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::Page;
use crate::domain::product::query::RawProductQuery;
use crate::domain::product::value_objects::Pagination;

pub struct GetAllProductsParams {
    pub query: RawProductQuery,
}

/// An unfiltered page of the catalog.
pub struct ProductPage {
    pub pagination: Pagination,
    pub page: Page,
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams) -> Result<ProductPage, ProductError>;
}
