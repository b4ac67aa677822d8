//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Customer │────►│ Invoice  │       │
//! │  │  Cart    │     │          │     │ Details  │     │ Written  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                │             │
//! │                   add_to_cart       place_order           │             │
//! │                   update_item       (order.rs)            │             │
//! │                   remove_item                             │             │
//! │                        │                                  │             │
//! │                        ▼                                  ▼             │
//! │                   clear_cart ─────────────────────► (back to empty)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use kart_core::{Cart, CartLine, Money, TaxRate};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{SessionState, ShopState};

/// Cart totals for display.
///
/// GST here is the same figure the invoice will carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of distinct products
    pub line_count: usize,

    /// Sum of all quantities
    pub total_quantity: i64,

    pub subtotal: Money,
    pub gst_rate: TaxRate,
    pub gst_amount: Money,
    pub total: Money,
}

impl CartTotals {
    pub fn new(cart: &Cart, gst_rate: TaxRate) -> Self {
        let subtotal = cart.subtotal();
        let gst_amount = subtotal.calculate_tax(gst_rate);

        CartTotals {
            line_count: cart.len(),
            total_quantity: cart.total_quantity(),
            subtotal,
            gst_rate,
            gst_amount,
            total: subtotal + gst_amount,
        }
    }
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub totals: CartTotals,
}

impl CartResponse {
    fn build(shop: &ShopState, cart: &Cart) -> Self {
        CartResponse {
            items: cart.snapshot(),
            totals: CartTotals::new(cart, shop.generator.gst_rate()),
        }
    }
}

/// Gets the current cart contents.
///
/// ## Display
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Your Cart:                                                             │
/// │    Apple - 3 pcs - ₹240.00                                              │
/// │    Banana - 2 pcs - ₹80.00                                              │
/// │  Subtotal: ₹320.00                                                      │
/// │  GST (10%): ₹32.00                                                      │
/// │  Total: ₹352.00                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(shop: &ShopState, session: &SessionState) -> CartResponse {
    debug!(lines = session.cart.len(), "get_cart command");
    CartResponse::build(shop, &session.cart)
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: appended with the catalog price, which stays
///   fixed for the rest of the session
/// - On any error the cart is left untouched
///
/// ## Arguments
/// * `product_name` - Exact catalog name
/// * `quantity` - Quantity to add (default: 1)
pub fn add_to_cart(
    shop: &ShopState,
    session: &mut SessionState,
    product_name: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product = %product_name, quantity = %quantity, "add_to_cart command");

    session.cart.add(&shop.catalog, product_name, quantity)?;

    Ok(CartResponse::build(shop, &session.cart))
}

/// Sets the quantity of a product already in the cart.
///
/// A quantity of 0 is rejected; use [`remove_from_cart`] instead.
pub fn update_cart_item(
    shop: &ShopState,
    session: &mut SessionState,
    product_name: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product = %product_name, quantity = %quantity, "update_cart_item command");

    session.cart.update_quantity(product_name, quantity)?;

    Ok(CartResponse::build(shop, &session.cart))
}

/// Removes a product line from the cart.
pub fn remove_from_cart(
    shop: &ShopState,
    session: &mut SessionState,
    product_name: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product = %product_name, "remove_from_cart command");

    session.cart.remove(product_name)?;

    Ok(CartResponse::build(shop, &session.cart))
}

/// Clears all items from the cart. Always succeeds.
pub fn clear_cart(shop: &ShopState, session: &mut SessionState) -> CartResponse {
    debug!(lines = session.cart.len(), "clear_cart command");

    session.cart.clear();

    CartResponse::build(shop, &session.cart)
}
