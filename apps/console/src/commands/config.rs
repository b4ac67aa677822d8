//! # Config Commands
//!
//! Retrieval of the running shop's configuration.

use tracing::debug;

use crate::state::{ShopConfig, ShopState};

/// Gets the current shop configuration.
///
/// ## Returns
/// Complete configuration (read-only), including the resolved GST rate
/// and invoice directory.
pub fn get_config(shop: &ShopState) -> ShopConfig {
    debug!("get_config command");
    shop.config.clone()
}
