//! # Shop State
//!
//! Read-only services built once from [`ShopConfig`] at startup.

use anyhow::Context;
use kart_core::{Catalog, InvoiceGenerator};
use kart_store::InvoiceStore;
use tracing::info;

use super::ShopConfig;

/// Catalog, invoice generator and invoice store for one running shop.
#[derive(Debug, Clone)]
pub struct ShopState {
    pub config: ShopConfig,
    pub catalog: Catalog,
    pub generator: InvoiceGenerator,
    pub store: InvoiceStore,
}

impl ShopState {
    /// Builds the shop from validated configuration.
    ///
    /// Opens (and creates, if missing) the invoice directory.
    pub fn from_config(config: ShopConfig) -> anyhow::Result<Self> {
        let catalog = config.catalog().context("Failed to build product catalog")?;
        let generator = InvoiceGenerator::new(config.gst_rate());
        let store = InvoiceStore::open(&config.invoice_dir).with_context(|| {
            format!(
                "Failed to open invoice directory {}",
                config.invoice_dir.display()
            )
        })?;

        info!(
            store_name = %config.store_name,
            products = catalog.len(),
            gst_rate = %generator.gst_rate(),
            invoice_dir = %store.dir().display(),
            "Shop initialized"
        );

        Ok(ShopState {
            config,
            catalog,
            generator,
            store,
        })
    }
}

#[cfg(test)]
impl ShopState {
    /// Default shop writing invoices under `dir`.
    pub(crate) fn for_tests(dir: &std::path::Path) -> Self {
        ShopState::from_config(ShopConfig {
            invoice_dir: dir.to_path_buf(),
            ..ShopConfig::default()
        })
        .unwrap()
    }
}
