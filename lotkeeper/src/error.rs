//! Error types for the lotkeeper library.
//!
//! This module provides the error hierarchy for all operations in the
//! lotkeeper library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a lotkeeper error.
///
/// # Examples
///
/// ```
/// use lotkeeper::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(20)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the lotkeeper library.
///
/// This enum encompasses all error conditions that can occur during
/// admission, reservation and billing operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A business rule refused the operation.
    #[error("conflict: {details}")]
    Conflict {
        /// Details about the conflict.
        details: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

// Additional conversions for better ergonomics

impl From<crate::vehicle::InvalidPlateError> for Error {
    fn from(err: crate::vehicle::InvalidPlateError) -> Self {
        Self::Validation {
            field: "plate".to_string(),
            message: format!("'{}': {}", err.value, err.reason),
        }
    }
}

impl Error {
    /// Check if the error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use lotkeeper::Error;
    ///
    /// let err = Error::NotFound { resource: "vehicle ABC123".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the error is a business-rule conflict.
    ///
    /// # Examples
    ///
    /// ```
    /// use lotkeeper::Error;
    ///
    /// let err = Error::Conflict { details: "open session exists".to_string() };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}
