//! Error types for the payroll service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a request or the start-up sequence can run into.

use serde::{Deserialize, Serialize};
use sqlx::error::DatabaseError;
use thiserror::Error;

/// Broad classification of a [`ServiceError`].
///
/// The HTTP layer decides which status code each kind maps to, depending
/// on the configured error policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The caller sent something the service or the database refused.
    Validation,
    /// A referenced row does not exist.
    NotFound,
    /// The storage backend failed.
    Storage,
    /// Anything else, including start-up configuration problems.
    Internal,
}

/// The main error type for the payroll service.
///
/// # Example
///
/// ```
/// use payroll_service::error::{ErrorKind, ServiceError};
///
/// let error = ServiceError::RoleNotFound { role_id: 7 };
/// assert_eq!(error.to_string(), "No role found with id 7");
/// assert_eq!(error.kind(), ErrorKind::NotFound);
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The request body could not be turned into the expected payload.
    #[error("{message}")]
    InvalidBody {
        /// The extractor's description, e.g. ``missing field `role_id` ``.
        message: String,
    },

    /// No role exists with the requested id.
    #[error("No role found with id {role_id}")]
    RoleNotFound {
        /// The id that was looked up.
        role_id: i32,
    },

    /// The database rejected a write because of a table constraint.
    #[error("{message}")]
    ConstraintViolation {
        /// The database's description of the violation.
        message: String,
    },

    /// The storage backend failed for any other reason.
    #[error("{message}")]
    Storage {
        /// The backend's error message.
        message: String,
    },

    /// A derived amount does not fit in a decimal.
    #[error("Arithmetic overflow: {message}")]
    Arithmetic {
        /// The operation that overflowed.
        message: String,
    },
}

impl ServiceError {
    /// Returns the kind used to pick a status code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::InvalidBody { .. } | ServiceError::ConstraintViolation { .. } => {
                ErrorKind::Validation
            }
            ServiceError::RoleNotFound { .. } => ErrorKind::NotFound,
            ServiceError::Storage { .. } => ErrorKind::Storage,
            ServiceError::ConfigNotFound { .. }
            | ServiceError::ConfigParseError { .. }
            | ServiceError::Arithmetic { .. } => ErrorKind::Internal,
        }
    }
}

/// SQLSTATE class for data exceptions (value too long, numeric out of range, ...).
const DATA_EXCEPTION_CLASS: &str = "22";

/// Returns true when the database refused the statement because of the
/// values it carried rather than because the backend failed.
fn is_rejected_input(db_error: &dyn DatabaseError) -> bool {
    use sqlx::error::ErrorKind as DbErrorKind;

    matches!(
        db_error.kind(),
        DbErrorKind::ForeignKeyViolation
            | DbErrorKind::NotNullViolation
            | DbErrorKind::CheckViolation
    ) || db_error
        .code()
        .is_some_and(|code| code.starts_with(DATA_EXCEPTION_CLASS))
}

impl From<sqlx::Error> for ServiceError {
    fn from(error: sqlx::Error) -> Self {
        if let Some(db_error) = error.as_database_error() {
            if is_rejected_input(db_error) {
                return ServiceError::ConstraintViolation {
                    message: db_error.message().to_string(),
                };
            }
        }

        ServiceError::Storage {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;
