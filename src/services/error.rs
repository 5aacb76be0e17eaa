use thiserror::Error;

/// Failure reported by a service capability.
///
/// `Display` is exactly the carried message, which is what clients see in
/// a 500 response body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The backing store could not be reached
    #[error("{0}")]
    Unavailable(String),

    /// The store refused or failed an operation
    #[error("{0}")]
    Storage(String),

    /// Search criteria that cannot be evaluated
    #[error("{0}")]
    InvalidCriteria(String),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ServiceError::InvalidCriteria(errors.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
