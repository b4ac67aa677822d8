//! # Validation Module
//!
//! Input validation for everything a customer types.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Place Order Checks                                 │
//! │                                                                         │
//! │  1. Cart non-empty?           ── no ──► ValidationError::EmptyCart      │
//! │           │                                                             │
//! │  2. validate_customer_name    ── no ──► "alphabets and spaces only"     │
//! │           │                                                             │
//! │  3. validate_phone            ── no ──► "10 digits (0 or 91 optional)"  │
//! │           │                                                             │
//! │  4. validate_invoice_filename ── no ──► "file name is required"         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Generate invoice & write artifact                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kart_core::validation::{validate_customer_name, validate_phone};
//!
//! assert!(validate_customer_name("John Smith").is_ok());
//! assert!(validate_phone("919876543210").is_ok());
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

static CUSTOMER_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").expect("customer name pattern is valid"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0|91)?[0-9]{10}$").expect("phone pattern is valid"));

// =============================================================================
// Customer Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty
/// - Only ASCII letters and spaces, over the whole string
///
/// ## Example
/// ```rust
/// use kart_core::validation::validate_customer_name;
///
/// assert!(validate_customer_name("John Smith").is_ok());
/// assert!(validate_customer_name("John3").is_err());
/// assert!(validate_customer_name("").is_err());
/// ```
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    if !CUSTOMER_NAME_RE.is_match(name) {
        return Err(ValidationError::InvalidFormat {
            field: "customer name".to_string(),
            reason: "must contain only alphabets and spaces".to_string(),
        });
    }

    Ok(())
}

/// Validates a phone number.
///
/// ## Rules
/// Exactly ten digits, optionally prefixed by a single `0` or by `91`:
/// ```text
///   9876543210      10 digits        ✅
///   09876543210     0 + 10 digits    ✅
///   919876543210    91 + 10 digits   ✅
///   12345           too short        ❌
///   +919876543210   '+' not allowed  ❌
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    if !PHONE_RE.is_match(phone) {
        return Err(ValidationError::InvalidFormat {
            field: "phone number".to_string(),
            reason: "must be 10 digits (0 or 91 optional)".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Invoice Filename
// =============================================================================

/// Validates the user-supplied invoice filename (without `.txt`).
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Must name a single file: no `/` or `\`, not `.` or `..`
/// - No control characters
///
/// ## Returns
/// The trimmed filename.
pub fn validate_invoice_filename(name: &str) -> ValidationResult<&str> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "file name".to_string(),
        });
    }

    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(ValidationError::InvalidFormat {
            field: "file name".to_string(),
            reason: "must be a plain file name, not a path".to_string(),
        });
    }

    if name.chars().any(char::is_control) {
        return Err(ValidationError::InvalidFormat {
            field: "file name".to_string(),
            reason: "must not contain control characters".to_string(),
        });
    }

    Ok(name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed MAX_ITEM_QUANTITY
pub fn validate_quantity(qty: i64) -> CoreResult<()> {
    if qty < 1 {
        return Err(CoreError::InvalidQuantity { requested: qty });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(CoreError::QuantityTooLarge {
            requested: qty,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("John Smith").is_ok());
        assert!(validate_customer_name("Asha").is_ok());
        assert!(validate_customer_name(" spaced out ").is_ok());

        assert!(validate_customer_name("John3").is_err());
        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("O'Brien").is_err());
        assert!(validate_customer_name("Anne-Marie").is_err());
        assert!(validate_customer_name("Zoë").is_err());
    }

    #[test]
    fn test_validate_customer_name_message() {
        let err = validate_customer_name("John3").unwrap_err();
        assert_eq!(
            err.to_string(),
            "customer name has invalid format: must contain only alphabets and spaces"
        );
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("09876543210").is_ok());
        assert!(validate_phone("919876543210").is_ok());

        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("").is_err());
        assert!(validate_phone("98765432101").is_err()); // 11 digits, no 0 prefix
        assert!(validate_phone("009876543210").is_err());
        assert!(validate_phone("+919876543210").is_err());
        assert!(validate_phone("98765 43210").is_err());
        assert!(validate_phone("9876543210\n").is_err());
    }

    #[test]
    fn test_validate_invoice_filename() {
        assert_eq!(validate_invoice_filename("order-42").unwrap(), "order-42");
        assert_eq!(validate_invoice_filename("  march  ").unwrap(), "march");

        assert!(matches!(
            validate_invoice_filename(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_invoice_filename("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_invoice_filename("../etc/passwd"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_invoice_filename("..").is_err());
        assert!(validate_invoice_filename("a\\b").is_err());
        assert!(validate_invoice_filename("bad\u{7}name").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_ITEM_QUANTITY).is_ok());

        assert_eq!(
            validate_quantity(0),
            Err(CoreError::InvalidQuantity { requested: 0 })
        );
        assert_eq!(
            validate_quantity(-3),
            Err(CoreError::InvalidQuantity { requested: -3 })
        );
        assert!(matches!(
            validate_quantity(MAX_ITEM_QUANTITY + 1),
            Err(CoreError::QuantityTooLarge { .. })
        ));
    }
}
