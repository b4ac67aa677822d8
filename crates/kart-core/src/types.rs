//! # Domain Types
//!
//! Small value types shared by the catalog, cart and invoice modules.
//!
//! ```text
//! ┌─────────────────┐   ┌─────────────────┐
//! │    Product      │   │    TaxRate      │
//! │  ─────────────  │   │  ─────────────  │
//! │  name (key)     │   │  bps (u32)      │
//! │  unit_price     │   │  1000 = 10%     │
//! └─────────────────┘   └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (the GST rate on every invoice by default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for config parsing).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::from_bps(crate::DEFAULT_GST_RATE_BPS)
    }
}

/// Percentage without trailing zeros: `10%`, `8.25%`, `12.5%`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}%", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}%", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}%", whole, frac)
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for purchase.
///
/// The name is the product's identity: the catalog and the cart are both
/// keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Display name, unique within a catalog.
    pub name: String,

    /// Price per piece.
    pub unit_price: Money,
}

impl Product {
    /// Creates a product priced in whole rupees.
    pub fn new(name: impl Into<String>, rupees: i64) -> Self {
        Product {
            name: name.into(),
            unit_price: Money::from_rupees(rupees),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(825);
        assert_eq!(rate.bps(), 825);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        assert_eq!(TaxRate::from_percentage(10.0).bps(), 1000);
        assert_eq!(TaxRate::from_percentage(8.25).bps(), 825);
    }

    #[test]
    fn test_tax_rate_default_is_gst() {
        assert_eq!(TaxRate::default().bps(), 1000);
    }

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_bps(1000).to_string(), "10%");
        assert_eq!(TaxRate::from_bps(825).to_string(), "8.25%");
        assert_eq!(TaxRate::from_bps(1250).to_string(), "12.5%");
        assert_eq!(TaxRate::from_bps(5).to_string(), "0.05%");
        assert_eq!(TaxRate::from_bps(0).to_string(), "0%");
    }

    #[test]
    fn test_product_new() {
        let product = Product::new("Apple", 80);
        assert_eq!(product.name, "Apple");
        assert_eq!(product.unit_price.paise(), 8000);
    }
}
