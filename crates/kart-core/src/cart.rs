//! # Cart
//!
//! The session's shopping cart.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  User Action              Method                 Cart Change            │
//! │  ───────────              ──────                 ───────────            │
//! │                                                                         │
//! │  Add to Cart ────────────► add() ───────────────► push or qty += n      │
//! │                                                                         │
//! │  Update Quantity ────────► update_quantity() ───► lines[i].qty = n      │
//! │                                                                         │
//! │  Remove Item ────────────► remove() ────────────► lines.remove(i)       │
//! │                                                                         │
//! │  Clear Cart / Order ─────► clear() ─────────────► lines.clear()         │
//! │                                                                         │
//! │  Place Order ────────────► snapshot() ──────────► (read only)           │
//! │                                                                         │
//! │  Every check runs before the first write: a failed call leaves the      │
//! │  cart exactly as it was.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_quantity;
use crate::MAX_ITEM_QUANTITY;

/// One product's aggregated quantity in the cart.
///
/// ## Price Locking
/// `unit_price` is captured from the catalog on the first add. Later adds
/// of the same product only raise the quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub product_name: String,
    pub unit_price: Money,
    pub quantity: i64,
}

impl CartLine {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per product name (adding again increases quantity)
/// - Every line's quantity is in `1..=MAX_ITEM_QUANTITY`
/// - Lines keep insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a product to the cart or increases its quantity.
    ///
    /// ## Errors
    /// - `InvalidQuantity` if `quantity < 1`
    /// - `ProductNotFound` if the catalog doesn't know `product_name`
    /// - `QuantityTooLarge` if the line would exceed `MAX_ITEM_QUANTITY`
    pub fn add(&mut self, catalog: &Catalog, product_name: &str, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;
        let unit_price = catalog.lookup(product_name)?;

        if let Some(line) = self.line_mut(product_name) {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        self.lines.push(CartLine {
            product_name: product_name.to_string(),
            unit_price,
            quantity,
        });
        Ok(())
    }

    /// Replaces the quantity of a product already in the cart.
    ///
    /// A quantity of 0 is rejected rather than treated as a removal; use
    /// [`Cart::remove`] for that.
    pub fn update_quantity(&mut self, product_name: &str, new_quantity: i64) -> CoreResult<()> {
        validate_quantity(new_quantity)?;

        let line = self
            .line_mut(product_name)
            .ok_or_else(|| CoreError::ProductNotFound(product_name.to_string()))?;
        line.quantity = new_quantity;
        Ok(())
    }

    /// Removes a product's line from the cart.
    ///
    /// Removing a product that isn't in the cart is an error, not a no-op.
    pub fn remove(&mut self, product_name: &str) -> CoreResult<CartLine> {
        let index = self
            .lines
            .iter()
            .position(|l| l.product_name == product_name)
            .ok_or_else(|| CoreError::ProductNotFound(product_name.to_string()))?;
        Ok(self.lines.remove(index))
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total pieces across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of line totals (before GST).
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Read-only view of the lines.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Owned copy of the lines in insertion order, for invoice generation.
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    fn line_mut(&mut self, product_name: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_name == product_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn apple_banana_cart() -> Cart {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add(&catalog, "Apple", 3).unwrap();
        cart.add(&catalog, "Banana", 2).unwrap();
        cart
    }

    #[test]
    fn test_cart_add_item() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();

        cart.add(&catalog, "Apple", 2).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal(), Money::from_rupees(160));
        assert_eq!(cart.lines()[0].unit_price, Money::from_rupees(80));
    }

    #[test]
    fn test_cart_add_same_product_accumulates() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();

        cart.add(&catalog, "Apple", 2).unwrap();
        cart.add(&catalog, "Apple", 3).unwrap();
        cart.add(&catalog, "Apple", 1).unwrap();

        let snapshot = cart.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].quantity, 6);
    }

    #[test]
    fn test_cart_keeps_insertion_order() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add(&catalog, "Papaya", 1).unwrap();
        cart.add(&catalog, "Laptop", 1).unwrap();
        cart.add(&catalog, "Papaya", 1).unwrap();

        let names: Vec<_> = cart.lines().iter().map(|l| l.product_name.as_str()).collect();
        assert_eq!(names, vec!["Papaya", "Laptop"]);
    }

    #[test]
    fn test_cart_add_rejects_bad_quantity() {
        let catalog = Catalog::standard();
        let mut cart = apple_banana_cart();
        let before = cart.clone();

        assert_eq!(
            cart.add(&catalog, "Apple", 0),
            Err(CoreError::InvalidQuantity { requested: 0 })
        );
        assert_eq!(
            cart.add(&catalog, "Papaya", -2),
            Err(CoreError::InvalidQuantity { requested: -2 })
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_cart_add_rejects_unknown_product() {
        let catalog = Catalog::standard();
        let mut cart = apple_banana_cart();
        let before = cart.clone();

        assert_eq!(
            cart.add(&catalog, "Mango", 1),
            Err(CoreError::ProductNotFound("Mango".to_string()))
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_cart_add_rejects_overflowing_quantity() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add(&catalog, "Apple", MAX_ITEM_QUANTITY).unwrap();

        assert!(matches!(
            cart.add(&catalog, "Apple", 1),
            Err(CoreError::QuantityTooLarge { .. })
        ));
        assert_eq!(cart.lines()[0].quantity, MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_price_locked_at_first_add() {
        let mut cart = Cart::new();
        let old = Catalog::new(vec![Product::new("Tea", 10)]).unwrap();
        let repriced = Catalog::new(vec![Product::new("Tea", 15)]).unwrap();

        cart.add(&old, "Tea", 1).unwrap();
        cart.add(&repriced, "Tea", 1).unwrap();

        assert_eq!(cart.lines()[0].unit_price, Money::from_rupees(10));
        assert_eq!(cart.subtotal(), Money::from_rupees(20));
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = apple_banana_cart();

        cart.update_quantity("Banana", 5).unwrap();

        assert_eq!(cart.lines()[1].quantity, 5);
        assert_eq!(cart.lines()[1].unit_price, Money::from_rupees(40));
    }

    #[test]
    fn test_update_quantity_errors_leave_cart_unchanged() {
        let mut cart = apple_banana_cart();
        let before = cart.clone();

        assert_eq!(
            cart.update_quantity("Laptop", 2),
            Err(CoreError::ProductNotFound("Laptop".to_string()))
        );
        assert_eq!(
            cart.update_quantity("Apple", 0),
            Err(CoreError::InvalidQuantity { requested: 0 })
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove() {
        let mut cart = apple_banana_cart();

        let removed = cart.remove("Apple").unwrap();

        assert_eq!(removed.quantity, 3);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].product_name, "Banana");
    }

    #[test]
    fn test_remove_absent_product_fails() {
        let mut cart = apple_banana_cart();
        let before = cart.clone();

        assert_eq!(
            cart.remove("Shirt"),
            Err(CoreError::ProductNotFound("Shirt".to_string()))
        );
        assert_eq!(cart, before);
        assert!(Cart::new().remove("Apple").is_err());
    }

    #[test]
    fn test_remove_last_line_empties_cart() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add(&catalog, "Shirt", 1).unwrap();

        cart.remove("Shirt").unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = apple_banana_cart();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());

        // Idempotent
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut cart = apple_banana_cart();
        let snapshot = cart.snapshot();

        cart.clear();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].line_total(), Money::from_rupees(240));
        assert_eq!(snapshot[1].line_total(), Money::from_rupees(80));
    }
}
