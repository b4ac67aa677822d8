//! # API Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Kart                                   │
//! │                                                                         │
//! │  Console                     Command Function                           │
//! │  ───────                     ────────────────                           │
//! │                                                                         │
//! │  "add Mango 2"                                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  add_to_cart() -> Result<CartResponse, ApiError>                 │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  CoreError::ProductNotFound("Mango") ──────────► ApiError ──────►│  │
//! │  │  StoreError::Io { .. } ────────────────────────► ApiError ──────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │  match err.code {                                                       │
//! │    NotFound => "Error: Product not found: Mango"                        │
//! │    ...                                                                  │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session keeps running after any error; only the failed action is
//! abandoned.

use kart_core::{CoreError, ValidationError};
use kart_store::StoreError;
use serde::Serialize;

/// Error returned from console commands.
///
/// ## Serialization
/// What `--json` mode prints when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: Mango"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product absent from the catalog or the cart
    NotFound,

    /// Quantity below one or above the per-line maximum
    InvalidQuantity,

    /// Customer input rejected (name, phone, file name, empty cart)
    ValidationError,

    /// Invoice file couldn't be written or read
    StorageError,

    /// Unexpected failure
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(name) => ApiError::not_found("Product", &name),
            CoreError::InvalidQuantity { .. } | CoreError::QuantityTooLarge { .. } => {
                ApiError::new(ErrorCode::InvalidQuantity, err.to_string())
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(e) => e.into(),
            StoreError::NotFound { file_name } => ApiError::not_found("Invoice", &file_name),
            StoreError::Io { .. } => {
                // Log the actual error but return a generic message
                tracing::error!(error = %err, "Invoice storage failed");
                ApiError::new(ErrorCode::StorageError, "Could not access the invoice file")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::ProductNotFound("Mango".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: Mango");

        let err: ApiError = CoreError::InvalidQuantity { requested: 0 }.into();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);

        let err: ApiError = CoreError::Validation(ValidationError::EmptyCart).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Cart is empty! Add items before placing order.");
    }

    #[test]
    fn test_store_error_mapping() {
        let err: ApiError = StoreError::NotFound {
            file_name: "march.txt".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Invoice not found: march.txt");

        let err: ApiError = StoreError::io(
            "/x/march.txt",
            std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        )
        .into();
        assert_eq!(err.code, ErrorCode::StorageError);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("Product", "Mango");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(
            json,
            r#"{"code":"NOT_FOUND","message":"Product not found: Mango"}"#
        );
    }
}
