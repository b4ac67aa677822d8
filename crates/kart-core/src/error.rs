//! # Error Types
//!
//! Domain-specific error types for kart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kart-core errors (this file)                                          │
//! │  ├── CoreError        - Catalog / cart rule violations                 │
//! │  └── ValidationError  - Customer input validation failures             │
//! │                                                                         │
//! │  kart-store errors (separate crate)                                    │
//! │  └── StoreError       - Invoice artifact read/write failures           │
//! │                                                                         │
//! │  Console host errors (in app)                                          │
//! │  └── ApiError         - What the display surface sees                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → Display   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, quantity, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Raised synchronously at the point of violation. A failed operation never
/// leaves the cart partially mutated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Product is absent from the catalog (on add) or from the cart
    /// (on update/remove).
    ///
    /// ## When This Occurs
    /// - Adding a name the catalog doesn't know
    /// - Updating or removing a product that has no cart line
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Quantity is below one.
    #[error("Invalid quantity {requested}: quantity must be at least 1")]
    InvalidQuantity { requested: i64 },

    /// Item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before an order is finalized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., digits in a customer name).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is beyond what the cart's totals can hold.
    #[error("{field} is too large")]
    TooLarge { field: String },

    /// Duplicate value (e.g., two catalog entries with one name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// Order placed with nothing in the cart.
    #[error("Cart is empty! Add items before placing order.")]
    EmptyCart,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
