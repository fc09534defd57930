//! Workflow logic between routes and the repository, generic over the
//! repository traits so tests can substitute mocks.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod agreements;
pub mod auth;
pub mod bookings;
pub mod vehicles;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    /// User-facing message rendered as a flash alert.
    #[error("{0}")]
    Form(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Unauthorized => ServiceError::Unauthorized,
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
