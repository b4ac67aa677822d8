//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats, 10% GST on ₹0.70 gives 0.06999999999999999                │
//! │  and an invoice line reading "GST (10%): ₹0.06999999999999999"          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    ₹320.00 = 32000 paise                                                │
//! │    GST = (32000 × 1000 bps + 5000) / 10000 = 3200 paise = ₹32.00       │
//! │    Every amount on an invoice has exactly two decimals                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kart_core::money::Money;
//!
//! let price = Money::from_rupees(80);          // ₹80.00
//! let line = price * 3;                        // ₹240.00
//! let total = line + Money::from_paise(8_000); // ₹320.00
//! assert_eq!(total.to_string(), "₹320.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

use crate::types::TaxRate;

/// Currency symbol used when rendering amounts.
pub const CURRENCY_SYMBOL: &str = "₹";

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in paise (1/100 of a rupee).
///
/// ## Where Money is Used
/// ```text
/// Product.unit_price ──► CartLine.unit_price ──► CartLine.line_total
///                                                      │
///                                                      ▼
///                        Invoice.subtotal ──► GST ──► Invoice.grand_total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use kart_core::money::Money;
    ///
    /// let price = Money::from_paise(1099); // ₹10.99
    /// assert_eq!(price.paise(), 1099);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// Catalog prices are whole rupees, so this is how products are priced.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Creates a Money value from whole rupees, or `None` if the amount
    /// doesn't fit in paise.
    ///
    /// Used for prices that come from configuration.
    ///
    /// ## Example
    /// ```rust
    /// use kart_core::money::Money;
    ///
    /// assert_eq!(Money::checked_from_rupees(80), Some(Money::from_rupees(80)));
    /// assert_eq!(Money::checked_from_rupees(i64::MAX / 10), None);
    /// ```
    #[inline]
    pub const fn checked_from_rupees(rupees: i64) -> Option<Self> {
        match rupees.checked_mul(100) {
            Some(paise) => Some(Money(paise)),
            None => None,
        }
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    ///
    /// ## Example
    /// ```rust
    /// use kart_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(1099).rupees(), 10);
    /// assert_eq!(Money::from_paise(-550).rupees(), -5);
    /// ```
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Calculates tax on this amount, rounding half-up to the nearest paisa.
    ///
    /// ## Implementation
    /// Integer math: `(amount × bps + 5000) / 10000`.
    /// The +5000 is half of the 10000 divisor, so a remainder of exactly
    /// half a paisa rounds up.
    ///
    /// ## Example
    /// ```rust
    /// use kart_core::money::Money;
    /// use kart_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_rupees(320);
    /// let gst = subtotal.calculate_tax(TaxRate::from_bps(1000)); // 10%
    /// assert_eq!(gst.paise(), 3_200); // ₹32.00
    ///
    /// // ₹0.05 at 10% = 0.5 paise → rounds up to 1 paisa
    /// assert_eq!(Money::from_paise(5).calculate_tax(TaxRate::from_bps(1000)).paise(), 1);
    /// ```
    ///
    /// ## Order Workflow
    /// ```text
    /// Subtotal: ₹320.00
    ///      │
    ///      ▼
    /// calculate_tax(10%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// GST: ₹32.00 ──► Total Amount: ₹352.00
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 so large subtotals can't overflow the intermediate product
        let tax_paise = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_paise(tax_paise as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use kart_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(80);
    /// assert_eq!(unit_price.multiply_quantity(3).paise(), 24_000); // ₹240.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as it appears on an invoice: `₹320.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            CURRENCY_SYMBOL,
            self.rupees().abs(),
            self.paise_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing line totals into a subtotal.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
