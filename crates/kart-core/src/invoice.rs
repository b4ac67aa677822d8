//! # Invoice
//!
//! Turns a cart snapshot and a validated customer into a priced, immutable
//! invoice and renders it as text.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart → Invoice Pipeline                            │
//! │                                                                         │
//! │  Cart::snapshot()          Customer::new(name, phone)                   │
//! │        │                            │                                   │
//! │        └──────────────┬─────────────┘                                   │
//! │                       ▼                                                 │
//! │        InvoiceGenerator::generate(customer, lines, issued_at)           │
//! │          • line_total  = unit_price × quantity                          │
//! │          • subtotal    = Σ line_total                                   │
//! │          • gst_amount  = subtotal × rate (half-up to the paisa)         │
//! │          • grand_total = subtotal + gst_amount                          │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │                 Invoice::render() ──► text handed to kart-store         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The generator never reads the clock: the caller passes `issued_at`, so the
//! same inputs always render the same text.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::CartLine;
use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::TaxRate;
use crate::validation::{validate_customer_name, validate_phone, ValidationResult};

/// Timestamp format printed on the invoice.
pub const INVOICE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const HEADER: &str = "********** INVOICE **********";
const CLOSING: &str = "Thank you for shopping with us!";

// =============================================================================
// Customer
// =============================================================================

/// A customer whose name and phone have passed validation.
///
/// The only way to build one is [`Customer::new`], so holding a `Customer`
/// proves the checks ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    name: String,
    phone: String,
}

impl Customer {
    /// Validates the name first, then the phone.
    pub fn new(name: &str, phone: &str) -> ValidationResult<Self> {
        validate_customer_name(name)?;
        validate_phone(phone)?;

        Ok(Customer {
            name: name.to_string(),
            phone: phone.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A priced line on an invoice (frozen copy of a cart line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceLine {
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

impl From<&CartLine> for InvoiceLine {
    fn from(line: &CartLine) -> Self {
        InvoiceLine {
            product_name: line.product_name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            line_total: line.line_total(),
        }
    }
}

/// A generated invoice. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Invoice {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Human-readable number printed on the invoice.
    pub invoice_number: String,

    pub customer_name: String,
    pub phone: String,

    /// Local wall-clock time the order was placed.
    #[ts(as = "String")]
    pub issued_at: NaiveDateTime,

    pub lines: Vec<InvoiceLine>,
    pub subtotal: Money,
    pub gst_rate: TaxRate,
    pub gst_amount: Money,
    pub grand_total: Money,
}

impl Invoice {
    /// Renders the invoice text written to the `.txt` artifact.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", HEADER)?;
        writeln!(f)?;
        writeln!(f, "Invoice No: {}", self.invoice_number)?;
        writeln!(f, "Customer Name: {}", self.customer_name)?;
        writeln!(f, "Phone Number: {}", self.phone)?;
        writeln!(f, "Date: {}", self.issued_at.format(INVOICE_DATE_FORMAT))?;
        writeln!(f)?;
        writeln!(f, "Items Purchased:")?;
        for line in &self.lines {
            writeln!(
                f,
                "{} - {} pcs - {}",
                line.product_name, line.quantity, line.line_total
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Subtotal: {}", self.subtotal)?;
        writeln!(f, "GST ({}): {}", self.gst_rate, self.gst_amount)?;
        writeln!(f, "Total Amount: {}", self.grand_total)?;
        writeln!(f)?;
        writeln!(f, "{}", CLOSING)
    }
}

// =============================================================================
// Invoice Generator
// =============================================================================

/// Computes invoice totals at a fixed GST rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvoiceGenerator {
    gst_rate: TaxRate,
}

impl InvoiceGenerator {
    pub fn new(gst_rate: TaxRate) -> Self {
        InvoiceGenerator { gst_rate }
    }

    pub fn gst_rate(&self) -> TaxRate {
        self.gst_rate
    }

    /// Builds an invoice from a cart snapshot.
    ///
    /// ## Errors
    /// `ValidationError::EmptyCart` when `lines` is empty. Callers are
    /// expected to check first; this keeps an empty invoice from ever
    /// reaching storage.
    pub fn generate(
        &self,
        customer: &Customer,
        lines: &[CartLine],
        issued_at: NaiveDateTime,
    ) -> CoreResult<Invoice> {
        if lines.is_empty() {
            return Err(ValidationError::EmptyCart.into());
        }

        let lines: Vec<InvoiceLine> = lines.iter().map(InvoiceLine::from).collect();
        let subtotal: Money = lines.iter().map(|l| l.line_total).sum();
        let gst_amount = subtotal.calculate_tax(self.gst_rate);
        let grand_total = subtotal + gst_amount;

        let id = Uuid::new_v4();

        Ok(Invoice {
            id: id.to_string(),
            invoice_number: invoice_number(&id, issued_at),
            customer_name: customer.name().to_string(),
            phone: customer.phone().to_string(),
            issued_at,
            lines,
            subtotal,
            gst_rate: self.gst_rate,
            gst_amount,
            grand_total,
        })
    }
}

/// `INV-<yymmdd>-<hhmmss>-<first 4 hex digits of the id>`
fn invoice_number(id: &Uuid, issued_at: NaiveDateTime) -> String {
    let suffix: String = id.simple().to_string().chars().take(4).collect();
    format!(
        "INV-{}-{}",
        issued_at.format("%y%m%d-%H%M%S"),
        suffix.to_uppercase()
    )
}
