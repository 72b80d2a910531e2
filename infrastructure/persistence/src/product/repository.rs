use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use crate::catalog_file::{CatalogFileConfig, CatalogFileError, read_catalog_file};

/// Catalog backed by a static JSON file. The file is read again on every
/// call, so edits are visible to the next request.
pub struct ProductRepositoryJsonFile {
    config: CatalogFileConfig,
}

impl ProductRepositoryJsonFile {
    pub fn new(config: CatalogFileConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryJsonFile {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let path = &self.config.path;
        let entities = read_catalog_file(path).await.map_err(|e| {
            tracing::error!(path = %path.display(), error = ?e, "catalog read failed");
            match e {
                CatalogFileError::Missing => RepositoryError::not_found(),
                CatalogFileError::Unreadable(_) => RepositoryError::unavailable(),
                CatalogFileError::Malformed(_) => RepositoryError::corrupt(),
            }
        })?;

        entities
            .into_iter()
            .enumerate()
            .map(|(position, entity)| {
                entity.into_domain(position).map_err(|e| {
                    tracing::error!(position, error = %e, "catalog record rejected");
                    RepositoryError::corrupt()
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    async fn write_temp(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(format!("{name}.json"));
        tokio::fs::write(&path, contents).await.unwrap();
        path
    }

    #[tokio::test]
    async fn should_load_products_in_file_order() {
        let dir = tempdir().unwrap();
        let path = write_temp(
            &dir,
            "ordered",
            r#"[
                {"title": "Apple", "brand": "Farm", "price": 1.99, "stock": 9, "rating": 4.2},
                {"title": "Beef Steak", "brand": "Farm", "price": 12.99, "stock": 0, "rating": 4.7},
                {"title": "Cat Food", "brand": "Purr", "price": 8.99, "stock": 13, "rating": 4.1}
            ]"#,
        )
        .await;
        let repository = ProductRepositoryJsonFile::new(CatalogFileConfig::new(path));

        let products = repository.get_all().await.unwrap();

        let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(products[1].title, "Beef Steak");
        assert_eq!(products[1].stock, 0);
    }

    #[tokio::test]
    async fn should_reread_file_on_every_call() {
        let dir = tempdir().unwrap();
        let path = write_temp(&dir, "reread", "[]").await;
        let repository = ProductRepositoryJsonFile::new(CatalogFileConfig::new(path.clone()));
        assert!(repository.get_all().await.unwrap().is_empty());

        tokio::fs::write(
            &path,
            r#"[{"title": "Juice", "brand": "Pulp", "price": 3, "stock": 2, "rating": 3.9}]"#,
        )
        .await
        .unwrap();

        assert_eq!(repository.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_map_missing_file_to_not_found() {
        let dir = tempdir().unwrap();
        let repository = ProductRepositoryJsonFile::new(CatalogFileConfig::new(
            dir.path().join("missing.json"),
        ));

        let result = repository.get_all().await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn should_map_invalid_record_to_corrupt() {
        let dir = tempdir().unwrap();
        let path = write_temp(
            &dir,
            "negative-price",
            r#"[{"title": "Refund", "brand": "Shop", "price": -5, "stock": 1, "rating": 1}]"#,
        )
        .await;
        let repository = ProductRepositoryJsonFile::new(CatalogFileConfig::new(path));

        let result = repository.get_all().await;

        assert!(matches!(result, Err(RepositoryError::Corrupt)));
    }

    #[tokio::test]
    async fn should_map_invalid_json_to_corrupt() {
        let dir = tempdir().unwrap();
        let path = write_temp(&dir, "invalid-json", "not json").await;
        let repository = ProductRepositoryJsonFile::new(CatalogFileConfig::new(path));

        let result = repository.get_all().await;

        assert!(matches!(result, Err(RepositoryError::Corrupt)));
    }
}
