//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A schema constraint was violated. The message names the offending
    /// field and is surfaced to API callers verbatim.
    #[error("{0}")]
    Validation(String),
}

/// Store-level errors surfaced by repository adapters.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Record not found")]
    NotFound,

    /// A store constraint (the unique slug index) rejected the write.
    #[error("{0}")]
    Constraint(String),

    /// The store-boundary validator rejected the record.
    #[error("{0}")]
    Validation(String),
}

/// Adapters run the entity validators at the storage boundary, so a schema
/// violation reaches callers as a store error.
impl From<DomainError> for RepoError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => RepoError::Validation(msg),
        }
    }
}
