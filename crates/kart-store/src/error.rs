//! # Store Error Types
//!
//! Error types for invoice artifact operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / ValidationError                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the path that failed                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in console host) ← Mapped to an error code                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Display surface prints a user-friendly message                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use kart_core::ValidationError;
use thiserror::Error;

/// Invoice artifact errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested filename was rejected before touching the disk.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Artifact doesn't exist.
    ///
    /// ## When This Occurs
    /// - Downloading an invoice that was never generated
    /// - The file was deleted outside the application
    #[error("Invoice not found: {file_name}")]
    NotFound { file_name: String },

    /// Filesystem operation failed.
    ///
    /// ## When This Occurs
    /// - Invoice directory can't be created
    /// - Permissions or disk full on write
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::NotFound {
            file_name: "march.txt".to_string(),
        };
        assert_eq!(err.to_string(), "Invoice not found: march.txt");

        let err = StoreError::io(
            "/nope/march.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error on /nope/march.txt: denied");
    }

    #[test]
    fn test_validation_converts() {
        let err: StoreError = ValidationError::Required {
            field: "file name".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Validation error: file name is required");
    }
}
