use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::query::parse_product_id;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::product::value_objects::IdBound;

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
    pub id_bound: IdBound,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Option<Product>, ProductError> {
        let id = parse_product_id(&params.product_id).inspect_err(|_| {
            self.logger
                .warn(&format!("Invalid product id: {:?}", params.product_id))
        })?;

        self.logger.info(&format!("Fetching product by id: {}", id));
        let products = self
            .repository
            .get_all()
            .await
            .inspect_err(|e| self.logger.error(&format!("Catalog read failed: {}", e)))?;

        let id = match u64::try_from(id) {
            Ok(id) if self.id_bound.admits(id, products.len()) => id,
            _ => {
                self.logger.warn(&format!(
                    "Product id {} outside catalog of {} ({} bound)",
                    id,
                    products.len(),
                    self.id_bound
                ));
                return Err(ProductError::NotFound);
            }
        };

        let product = products.into_iter().find(|p| p.id == id);
        if product.is_none() {
            self.logger.debug(&format!("No product carries id {}", id));
        }
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::fixtures::product;
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

    fn three_products() -> Vec<Product> {
        vec![
            product(0, "Essence Mascara", "Essence", 9.99, 5, 4.94),
            product(1, "Eyeshadow Palette", "Glamour Beauty", 19.99, 44, 3.28),
            product(2, "Powder Canister", "Velvet Touch", 14.99, 59, 3.82),
        ]
    }

    fn use_case(id_bound: IdBound) -> GetProductByIdUseCaseImpl {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(three_products()));
        GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            id_bound,
        }
    }

    async fn lookup(
        use_case: &GetProductByIdUseCaseImpl,
        id: &str,
    ) -> Result<Option<Product>, ProductError> {
        use_case
            .execute(GetProductByIdParams {
                product_id: id.to_string(),
            })
            .await
    }

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let result = lookup(&use_case(IdBound::Strict), "0").await;

        assert!(result.is_ok());
        let product = result.unwrap().unwrap();
        assert_eq!(product.id, 0);
        assert_eq!(product.title, "Essence Mascara");
    }

    #[tokio::test]
    async fn should_reject_id_equal_to_length_with_strict_bound() {
        let result = lookup(&use_case(IdBound::Strict), "3").await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn should_find_nothing_for_id_equal_to_length_with_inclusive_bound() {
        let result = lookup(&use_case(IdBound::Inclusive), "3").await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn should_reject_id_beyond_length_with_inclusive_bound() {
        let result = lookup(&use_case(IdBound::Inclusive), "4").await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn should_reject_negative_id() {
        let result = lookup(&use_case(IdBound::Inclusive), "-1").await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn should_report_overflowing_id_as_not_found_without_reading_catalog() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().never();
        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            id_bound: IdBound::Strict,
        };

        let result = lookup(&use_case, "99999999999999999999").await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn should_reject_non_integer_id_without_reading_catalog() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().never();
        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            id_bound: IdBound::Strict,
        };

        let result = lookup(&use_case, "abc").await;

        assert!(matches!(result, Err(ProductError::InvalidProductId)));
    }

    #[tokio::test]
    async fn should_return_first_match_when_ids_repeat() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                product(1, "First", "A", 1.0, 1, 1.0),
                product(1, "Second", "B", 2.0, 1, 2.0),
            ])
        });
        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            id_bound: IdBound::Strict,
        };

        let product = lookup(&use_case, "1").await.unwrap().unwrap();

        assert_eq!(product.title, "First");
    }

    #[tokio::test]
    async fn should_propagate_catalog_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::NotFound));
        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            id_bound: IdBound::Strict,
        };

        let result = lookup(&use_case, "0").await;

        assert!(matches!(
            result,
            Err(ProductError::Repository(RepositoryError::NotFound))
        ));
    }
}
