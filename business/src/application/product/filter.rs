use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::filter_and_paginate;
use crate::domain::product::query::ProductQueryParser;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::filter::{FilterProductsParams, FilterProductsUseCase};
use crate::domain::product::use_cases::get_all::ProductPage;
use crate::domain::product::value_objects::QueryDefaults;

pub struct FilterProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
    pub defaults: QueryDefaults,
}

#[async_trait]
impl FilterProductsUseCase for FilterProductsUseCaseImpl {
    async fn execute(&self, params: FilterProductsParams) -> Result<ProductPage, ProductError> {
        let query = ProductQueryParser::new(self.defaults)
            .parse(params.kind, &params.query)
            .inspect_err(|e| {
                self.logger
                    .warn(&format!("Rejected {} filter: {:?}", params.kind, e))
            })?;

        self.logger
            .info(&format!("Filtering products by {:?}", query.criteria));
        let products = self
            .repository
            .get_all()
            .await
            .inspect_err(|e| self.logger.error(&format!("Catalog read failed: {}", e)))?;

        let page = filter_and_paginate(products, &query.criteria, query.pagination);
        self.logger.info(&format!(
            "Matched {} products, returning {}",
            page.total,
            page.products.len()
        ));
        Ok(ProductPage {
            pagination: query.pagination,
            page,
        })
    }
}
