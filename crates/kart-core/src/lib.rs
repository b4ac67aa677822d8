//! # kart-core: Pure Business Logic for Kart
//!
//! This crate is the **heart** of Kart. It contains the catalog, the cart,
//! customer validation and the invoice pipeline as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Kart Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Display Surface (console host)                   │   │
//! │  │    Products ──► Cart ──► Place Order ──► Download Invoice        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                     Command Handlers                             │   │
//! │  │    add_to_cart, update_cart_item, place_order, etc.              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ kart-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐  │   │
//! │  │  │ catalog │ │  money  │ │  cart   │ │validation│ │ invoice │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILESYSTEM • NO CLOCK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 kart-store (Invoice Artifacts)                   │   │
//! │  │              <name>.txt writes and reads                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The read-only product catalog
//! - [`cart`] - Session cart with add/update/remove/clear
//! - [`invoice`] - Totals and invoice rendering
//! - [`error`] - Domain error types
//! - [`validation`] - Customer, phone, quantity and filename rules
//!
//! ## Example Usage
//!
//! ```rust
//! use kart_core::{Cart, Catalog, Customer, InvoiceGenerator, TaxRate};
//! use chrono::NaiveDate;
//!
//! let catalog = Catalog::standard();
//! let mut cart = Cart::new();
//! cart.add(&catalog, "Apple", 3).unwrap();
//! cart.add(&catalog, "Banana", 2).unwrap();
//!
//! let customer = Customer::new("John Smith", "9876543210").unwrap();
//! let issued_at = NaiveDate::from_ymd_opt(2026, 10, 19)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//!
//! let generator = InvoiceGenerator::new(TaxRate::from_bps(1000));
//! let invoice = generator.generate(&customer, &cart.snapshot(), issued_at).unwrap();
//!
//! assert_eq!(invoice.subtotal.paise(), 32_000);   // ₹320.00
//! assert_eq!(invoice.gst_amount.paise(), 3_200);  // ₹32.00
//! assert_eq!(invoice.grand_total.paise(), 35_200); // ₹352.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod invoice;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{Customer, Invoice, InvoiceGenerator, InvoiceLine};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single product in the cart.
///
/// Keeps `unit_price × quantity` far away from `i64` overflow for any
/// realistic catalog price.
pub const MAX_ITEM_QUANTITY: i64 = 9_999;

/// GST rate applied when configuration doesn't override it (10%).
pub const DEFAULT_GST_RATE_BPS: u32 = 1_000;
