use domain::DomainError;
use thiserror::Error;

/// Errors that can occur when reading or writing entities.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No entity with the given id exists.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// An entity with the given id already exists.
    #[error("{entity} {id} already exists")]
    AlreadyExists { entity: &'static str, id: String },

    /// A stored row could not be turned back into a valid entity.
    #[error("Invalid stored data: {0}")]
    InvalidData(#[from] DomainError),

    /// A numeric value does not fit the column or field it is copied into.
    #[error("Value out of range for {column}")]
    OutOfRange { column: &'static str },

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl RepositoryError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub(crate) fn already_exists(entity: &'static str, id: impl ToString) -> Self {
        Self::AlreadyExists {
            entity,
            id: id.to_string(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
