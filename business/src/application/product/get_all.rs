use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::{FilterKind, filter_and_paginate};
use crate::domain::product::query::ProductQueryParser;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{
    GetAllProductsParams, GetAllProductsUseCase, ProductPage,
};
use crate::domain::product::value_objects::QueryDefaults;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
    pub defaults: QueryDefaults,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<ProductPage, ProductError> {
        let query = ProductQueryParser::new(self.defaults)
            .parse(FilterKind::All, &params.query)
            .inspect_err(|e| self.logger.warn(&format!("Rejected product listing: {:?}", e)))?;

        self.logger.info(&format!(
            "Fetching products (limit {}, skip {})",
            query.pagination.limit, query.pagination.skip
        ));
        let products = self
            .repository
            .get_all()
            .await
            .inspect_err(|e| self.logger.error(&format!("Catalog read failed: {}", e)))?;

        let page = filter_and_paginate(products, &query.criteria, query.pagination);
        self.logger.info(&format!(
            "Returning {} of {} products",
            page.products.len(),
            page.total
        ));
        Ok(ProductPage {
            pagination: query.pagination,
            page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use crate::domain::product::model::fixtures::catalog;
    use crate::domain::product::query::RawProductQuery;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case(repo: MockProductRepo) -> GetAllProductsUseCaseImpl {
        GetAllProductsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
            defaults: QueryDefaults::default(),
        }
    }

    #[tokio::test]
    async fn should_return_first_page_with_defaults() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().times(1).returning(|| Ok(catalog()));

        let result = use_case(mock_repo)
            .execute(GetAllProductsParams {
                query: RawProductQuery::default(),
            })
            .await;

        assert!(result.is_ok());
        let page = result.unwrap();
        assert_eq!(page.pagination.limit, 10);
        assert_eq!(page.pagination.skip, 0);
        assert_eq!(page.page.total, 5);
        assert_eq!(page.page.products.len(), 5);
    }

    #[tokio::test]
    async fn should_slice_requested_window() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(catalog()));

        let page = use_case(mock_repo)
            .execute(GetAllProductsParams {
                query: RawProductQuery::from_pairs([("limit", "2"), ("skip", "3")]),
            })
            .await
            .unwrap();

        assert_eq!(page.page.total, 5);
        let ids: Vec<u64> = page.page.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[tokio::test]
    async fn should_reject_invalid_limit_without_reading_catalog() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().never();

        let result = use_case(mock_repo)
            .execute(GetAllProductsParams {
                query: RawProductQuery::from_pairs([("limit", "abc")]),
            })
            .await;

        assert!(matches!(
            result,
            Err(ProductError::InvalidQuery { ref parameter }) if parameter == "limit"
        ));
    }

    #[tokio::test]
    async fn should_propagate_catalog_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::Corrupt));

        let result = use_case(mock_repo)
            .execute(GetAllProductsParams {
                query: RawProductQuery::default(),
            })
            .await;

        assert!(matches!(
            result,
            Err(ProductError::Repository(RepositoryError::Corrupt))
        ));
    }
}
