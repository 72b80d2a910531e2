#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_query")]
    InvalidQuery { parameter: String },
    #[error("product.invalid_id")]
    InvalidProductId,
    #[error("product.not_found")]
    NotFound,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("repository.failure")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    pub fn invalid_query(parameter: impl Into<String>) -> Self {
        ProductError::InvalidQuery {
            parameter: parameter.into(),
        }
    }
}
