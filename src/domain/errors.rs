use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// An identifier string that cannot be parsed in the store's id format.
    #[error("Malformed identifier: {0:?}")]
    MalformedReference(String),
    #[error("Menu item not found: {0}")]
    ReferenceNotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
