/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.unavailable")]
    Unavailable,
    #[error("repository.corrupt")]
    Corrupt,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn unavailable() -> Self {
        RepositoryError::Unavailable
    }
    pub fn corrupt() -> Self {
        RepositoryError::Corrupt
    }
}
