use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::product::entity::ProductEntity;

#[derive(Error, Debug)]
pub enum CatalogFileError {
    #[error("catalog.file_missing")]
    Missing,
    #[error("catalog.file_unreadable")]
    Unreadable(#[source] std::io::Error),
    #[error("catalog.file_malformed")]
    Malformed(#[source] serde_json::Error),
}

/// Configuration for the static catalog file
#[derive(Debug, Clone)]
pub struct CatalogFileConfig {
    pub path: PathBuf,
}

impl CatalogFileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Accepted file layouts: a bare array of products, or an object wrapping
/// the array under `products`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<ProductEntity>),
    Wrapped { products: Vec<ProductEntity> },
}

impl CatalogDocument {
    fn into_entities(self) -> Vec<ProductEntity> {
        match self {
            CatalogDocument::Bare(products) | CatalogDocument::Wrapped { products } => products,
        }
    }
}

/// Reads and decodes the whole catalog file, preserving record order.
pub async fn read_catalog_file(path: &Path) -> Result<Vec<ProductEntity>, CatalogFileError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogFileError::Missing,
        _ => CatalogFileError::Unreadable(e),
    })?;

    let document: CatalogDocument =
        serde_json::from_slice(&bytes).map_err(CatalogFileError::Malformed)?;

    Ok(document.into_entities())
}
