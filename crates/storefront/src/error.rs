//! Runner error types.

use domain::{AddressError, CustomerError, DomainError, OrderError, ProductError};
use event_dispatch::DispatchError;
use persistence::RepositoryError;
use thiserror::Error;

/// Errors that abort a storefront run.
#[derive(Debug, Error)]
pub enum AppError {
    /// An entity rejected an operation.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Handlers could not be registered.
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Storage failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// The database could not be reached.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The Prometheus recorder could not be installed.
    #[error("Metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

macro_rules! domain_error_from {
    ($($err:ty),* $(,)?) => {
        $(
            impl From<$err> for AppError {
                fn from(err: $err) -> Self {
                    Self::Domain(DomainError::from(err))
                }
            }
        )*
    };
}

domain_error_from!(CustomerError, AddressError, ProductError, OrderError);

/// Result type for runner operations.
pub type Result<T> = std::result::Result<T, AppError>;
