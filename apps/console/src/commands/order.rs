//! # Order Commands
//!
//! Order placement (invoice generation + artifact write) and invoice
//! download.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Place Order Flow                                     │
//! │                                                                         │
//! │  1. CHECK CART                                                         │
//! │     └── Empty? ──► "Cart is empty! Add items before placing order."    │
//! │                                                                         │
//! │  2. VALIDATE CUSTOMER                                                  │
//! │     ├── Name: letters and spaces only                                  │
//! │     └── Phone: 10 digits, optional 0 or 91 prefix                      │
//! │                                                                         │
//! │  3. VALIDATE FILE NAME                                                 │
//! │     └── Non-blank, no path separators                                  │
//! │                                                                         │
//! │  4. GENERATE INVOICE                                                   │
//! │     └── Subtotal + 10% GST = Total                                     │
//! │                                                                         │
//! │  5. WRITE <file>.txt                                                   │
//! │                                                                         │
//! │  6. CLEAR CART                                                         │
//! │     └── Only after the file is on disk                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any failure in steps 1-5 leaves the cart exactly as it was.

use chrono::{Local, NaiveDateTime};
use kart_core::{Customer, Invoice, ValidationError};
use kart_store::{InvoiceArtifact, InvoiceStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{SessionState, ShopState};

/// Customer details collected at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_name: String,
    pub phone: String,

    /// Invoice file name, without the `.txt` suffix
    pub file_name: String,
}

/// Result of a placed order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub invoice: Invoice,
    pub artifact: InvoiceArtifact,
}

/// Invoice text fetched through the download surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    pub file_name: String,
    pub contents: String,
}

/// Places the order for the current cart, stamped with local time.
pub fn place_order(
    shop: &ShopState,
    session: &mut SessionState,
    request: &OrderRequest,
) -> Result<OrderResponse, ApiError> {
    place_order_at(shop, session, request, Local::now().naive_local())
}

/// Places the order with an explicit invoice timestamp.
///
/// ## Errors
/// - `VALIDATION_ERROR`: empty cart, bad name, bad phone or bad file name
/// - `STORAGE_ERROR`: the invoice file couldn't be written
pub fn place_order_at(
    shop: &ShopState,
    session: &mut SessionState,
    request: &OrderRequest,
    issued_at: NaiveDateTime,
) -> Result<OrderResponse, ApiError> {
    debug!(
        lines = session.cart.len(),
        file_name = %request.file_name,
        "place_order command"
    );

    if session.cart.is_empty() {
        return Err(ValidationError::EmptyCart.into());
    }

    let customer = Customer::new(&request.customer_name, &request.phone)?;

    // Reject the file name before generating anything
    InvoiceStore::artifact_name(&request.file_name)?;

    let invoice = shop
        .generator
        .generate(&customer, session.cart.lines(), issued_at)?;
    let artifact = shop.store.save(&request.file_name, &invoice)?;

    session.cart.clear();
    session.record_invoice(artifact.file_name.clone());

    info!(
        invoice_number = %invoice.invoice_number,
        lines = invoice.lines.len(),
        total = %invoice.grand_total,
        file = %artifact.file_name,
        "Order placed"
    );

    Ok(OrderResponse { invoice, artifact })
}

/// Reads back an invoice file.
///
/// With no `file_name`, returns the most recent invoice of this session.
pub fn download_invoice(
    shop: &ShopState,
    session: &SessionState,
    file_name: Option<&str>,
) -> Result<DownloadResponse, ApiError> {
    debug!(file_name = ?file_name, "download_invoice command");

    let name = match file_name {
        Some(name) => name,
        None => session
            .last_invoice()
            .ok_or_else(|| ApiError::validation("No invoice has been generated yet"))?,
    };

    let file_name = InvoiceStore::artifact_name(name)?;
    let bytes = shop.store.read(&file_name)?;
    let contents = String::from_utf8(bytes)
        .map_err(|_| ApiError::internal(format!("{} is not valid UTF-8", file_name)))?;

    Ok(DownloadResponse {
        file_name,
        contents,
    })
}
