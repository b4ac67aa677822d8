//! # Catalog
//!
//! The fixed list of purchasable products. Built once at startup and
//! read-only afterwards; carts look prices up here at add time.

use serde::Serialize;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::validation::ValidationResult;
use crate::MAX_ITEM_QUANTITY;

/// Largest subtotal a cart may reach, in paise.
///
/// Half of `i64::MAX`, so GST at up to 100% still fits in the grand total.
const MAX_SUBTOTAL_PAISE: i64 = i64::MAX / 2;

/// Read-only product catalog, iterated in definition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from configured products.
    ///
    /// ## Rules
    /// - Names must be non-empty and unique
    /// - Prices must be positive
    /// - A cart holding every product at `MAX_ITEM_QUANTITY` must not
    ///   overflow the subtotal, so no price is large enough to break the
    ///   cart's arithmetic
    pub fn new(products: Vec<Product>) -> ValidationResult<Self> {
        let count = products.len() as i64;

        for (i, product) in products.iter().enumerate() {
            if product.name.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: "product name".to_string(),
                });
            }

            if !product.unit_price.is_positive() {
                return Err(ValidationError::MustBePositive {
                    field: format!("price of {}", product.name),
                });
            }

            let worst_case = product
                .unit_price
                .paise()
                .checked_mul(MAX_ITEM_QUANTITY)
                .and_then(|line| line.checked_mul(count));
            if !matches!(worst_case, Some(total) if total <= MAX_SUBTOTAL_PAISE) {
                return Err(ValidationError::TooLarge {
                    field: format!("price of {}", product.name),
                });
            }

            if products[..i].iter().any(|p| p.name == product.name) {
                return Err(ValidationError::Duplicate {
                    field: "product".to_string(),
                    value: product.name.clone(),
                });
            }
        }

        Ok(Catalog { products })
    }

    /// The store's standard product list.
    pub fn standard() -> Self {
        Catalog {
            products: vec![
                Product::new("Laptop", 50_000),
                Product::new("Headphones", 1_500),
                Product::new("SamsungS22", 60_000),
                Product::new("Shirt", 800),
                Product::new("Pant", 1_200),
                Product::new("Apple", 80),
                Product::new("Banana", 40),
                Product::new("Papaya", 60),
            ],
        }
    }

    /// Returns the unit price of a product.
    ///
    /// Names match exactly (case-sensitive).
    pub fn lookup(&self, name: &str) -> CoreResult<Money> {
        self.get(name)
            .map(|p| p.unit_price)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))
    }

    /// Returns the product with this name, if any.
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// All products in definition order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = Catalog::standard();
        let names: Vec<&str> = catalog.list_all().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Laptop",
                "Headphones",
                "SamsungS22",
                "Shirt",
                "Pant",
                "Apple",
                "Banana",
                "Papaya"
            ]
        );
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.lookup("Apple"), Ok(Money::from_rupees(80)));
        assert_eq!(catalog.lookup("SamsungS22"), Ok(Money::from_rupees(60_000)));
    }

    #[test]
    fn test_lookup_unknown_product() {
        let catalog = Catalog::standard();
        assert_eq!(
            catalog.lookup("Mango"),
            Err(CoreError::ProductNotFound("Mango".to_string()))
        );
        // Exact match only
        assert!(catalog.lookup("apple").is_err());
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let result = Catalog::new(vec![Product::new("Tea", 10), Product::new("Tea", 12)]);
        assert!(matches!(result, Err(ValidationError::Duplicate { .. })));
    }

    #[test]
    fn test_new_rejects_bad_products() {
        assert!(matches!(
            Catalog::new(vec![Product::new("Free Sample", 0)]),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            Catalog::new(vec![Product::new("  ", 10)]),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_new_rejects_prices_that_overflow_totals() {
        // ₹10^14 × 9 999 pieces doesn't fit in i64 paise
        let result = Catalog::new(vec![Product::new("Yacht", 100_000_000_000_000)]);
        assert_eq!(
            result,
            Err(ValidationError::TooLarge {
                field: "price of Yacht".to_string()
            })
        );

        // The bound scales with catalog size
        let price = 3_000_000_000_000; // ₹3 × 10^12
        assert!(Catalog::new(vec![Product::new("Yacht", price)]).is_ok());
        assert!(matches!(
            Catalog::new(vec![Product::new("Yacht", price), Product::new("Jet", price)]),
            Err(ValidationError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_largest_accepted_price_fills_cart_safely() {
        let catalog = Catalog::new(vec![Product::new("Yacht", 1_000_000_000_000)]).unwrap();
        let mut cart = crate::Cart::new();

        cart.add(&catalog, "Yacht", MAX_ITEM_QUANTITY).unwrap();

        let subtotal = cart.subtotal();
        assert_eq!(subtotal.paise(), 100_000_000_000_000 * MAX_ITEM_QUANTITY);
        let gst = subtotal.calculate_tax(crate::TaxRate::default());
        assert!((subtotal + gst).is_positive());
    }

    #[test]
    fn test_new_keeps_order() {
        let catalog = Catalog::new(vec![Product::new("Tea", 10), Product::new("Coffee", 25)])
            .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.list_all()[1].name, "Coffee");
        assert!(catalog.get("Tea").is_some());
    }
}
