//! # Catalog Commands
//!
//! Product listing for the display surface.

use kart_core::Product;
use tracing::debug;

use crate::state::ShopState;

/// Lists every product in catalog order.
///
/// ## Display
/// ```text
/// Available Products:
///   Laptop        ₹50000.00
///   Headphones    ₹1500.00
///   ...
/// ```
pub fn list_products(shop: &ShopState) -> Vec<Product> {
    debug!(count = shop.catalog.len(), "list_products command");
    shop.catalog.list_all().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_products_in_catalog_order() {
        let tmp = tempfile::tempdir().unwrap();
        let shop = ShopState::for_tests(tmp.path());

        let products = list_products(&shop);

        assert_eq!(products.len(), 8);
        assert_eq!(products[0].name, "Laptop");
        assert_eq!(products[7].name, "Papaya");
    }
}
