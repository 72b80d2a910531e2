use std::sync::Arc;

use logger::TracingLogger;
use persistence::catalog_file::CatalogFileConfig;
use persistence::product::repository::ProductRepositoryJsonFile;

use business::application::product::filter::FilterProductsUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;

use crate::config::catalog_config::CatalogConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(config: &CatalogConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository: Arc<dyn ProductRepository> = Arc::new(
            ProductRepositoryJsonFile::new(CatalogFileConfig::new(config.products_file.clone())),
        );

        // Product use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
            defaults: config.defaults,
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
            id_bound: config.id_bound,
        });
        let filter_use_case = Arc::new(FilterProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger,
            defaults: config.defaults,
        });

        let health_api = crate::api::health::routes::Api::new(product_repository);
        let product_api = crate::api::product::routes::ProductApi::new(
            get_all_use_case,
            get_by_id_use_case,
            filter_use_case,
        );

        Self {
            health_api,
            product_api,
        }
    }
}
