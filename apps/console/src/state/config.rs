//! # Shop Configuration
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     KART_STORE_NAME="Corner Shop"                                      │
//! │     KART_GST_RATE=10          (percent, decimals allowed: 8.25)        │
//! │     KART_INVOICE_DIR=./invoices                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or the platform config dir:                       │
//! │     ~/.config/kart/kart.toml (Linux)                                   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Standard catalog, 10% GST, invoices in the working directory      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "Corner Shop"
//! gst_rate_bps = 1000        # 10%
//! invoice_dir = "invoices"
//!
//! # Optional: replaces the standard catalog
//! [[products]]
//! name = "Tea"
//! price = 10                 # rupees
//!
//! [[products]]
//! name = "Coffee"
//! price = 25
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use kart_core::{Catalog, Money, Product, TaxRate, ValidationError, DEFAULT_GST_RATE_BPS};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Store name shown in the console banner
    pub store_name: String,

    /// GST rate in basis points (1000 = 10%)
    pub gst_rate_bps: u32,

    /// Directory invoice `.txt` files are written to
    pub invoice_dir: PathBuf,

    /// Catalog override; empty means the standard catalog
    pub products: Vec<ProductConfig>,
}

/// One configured catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductConfig {
    pub name: String,

    /// Unit price in whole rupees
    pub price: i64,
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] ValidationError),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

impl Default for ShopConfig {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - Store: "Kart Online Store"
    /// - GST: 10%
    /// - Invoices: current working directory
    /// - Catalog: standard
    fn default() -> Self {
        ShopConfig {
            store_name: "Kart Online Store".to_string(),
            gst_rate_bps: DEFAULT_GST_RATE_BPS,
            invoice_dir: PathBuf::from("."),
            products: Vec::new(),
        }
    }
}

impl ShopConfig {
    /// Loads configuration from file and environment.
    ///
    /// An explicit `config_path` must exist; the platform default path is
    /// optional.
    pub fn load(config_path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(path = %path.display(), "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(path = %path.display(), "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Platform config file location (`kart.toml` in the user config dir).
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "kart", "kart").map(|dirs| dirs.config_dir().join("kart.toml"))
    }

    /// Applies `KART_*` overrides using `lookup` to read variables.
    ///
    /// ## Variables
    /// - `KART_STORE_NAME`: store name
    /// - `KART_GST_RATE`: GST percentage, e.g. `10` or `8.25`
    /// - `KART_INVOICE_DIR`: invoice directory
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(store_name) = lookup("KART_STORE_NAME") {
            self.store_name = store_name;
        }

        if let Some(rate) = lookup("KART_GST_RATE") {
            let pct = rate
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|pct| pct.is_finite() && *pct >= 0.0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "KART_GST_RATE".to_string(),
                    value: rate.clone(),
                })?;
            self.gst_rate_bps = TaxRate::from_percentage(pct).bps();
        }

        if let Some(dir) = lookup("KART_INVOICE_DIR") {
            self.invoice_dir = PathBuf::from(dir);
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.gst_rate_bps > 10_000 {
            return Err(ConfigError::InvalidValue {
                key: "gst_rate_bps".to_string(),
                value: self.gst_rate_bps.to_string(),
            });
        }

        if self.invoice_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "invoice_dir".to_string(),
                value: String::new(),
            });
        }

        self.catalog()?;
        Ok(())
    }

    /// GST rate as a [`TaxRate`].
    pub fn gst_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.gst_rate_bps)
    }

    /// Builds the catalog: configured products, or the standard list.
    pub fn catalog(&self) -> ConfigResult<Catalog> {
        if self.products.is_empty() {
            return Ok(Catalog::standard());
        }

        let products = self
            .products
            .iter()
            .map(|p| {
                let unit_price = Money::checked_from_rupees(p.price).ok_or_else(|| {
                    ValidationError::TooLarge {
                        field: format!("price of {}", p.name),
                    }
                })?;
                Ok(Product {
                    name: p.name.clone(),
                    unit_price,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;
        Ok(Catalog::new(products)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ShopConfig::default();
        assert_eq!(config.gst_rate().bps(), 1000);
        assert_eq!(config.invoice_dir, PathBuf::from("."));
        assert_eq!(config.catalog().unwrap(), Catalog::standard());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config: ShopConfig = toml::from_str(
            r#"
            store_name = "Corner Shop"
            gst_rate_bps = 500
            invoice_dir = "invoices"

            [[products]]
            name = "Tea"
            price = 10

            [[products]]
            name = "Coffee"
            price = 25
            "#,
        )
        .unwrap();

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.gst_rate().to_string(), "5%");
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("Coffee").unwrap().paise(), 2500);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ShopConfig = toml::from_str(r#"store_name = "Only Name""#).unwrap();
        assert_eq!(config.gst_rate_bps, DEFAULT_GST_RATE_BPS);
        assert!(config.products.is_empty());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ShopConfig::default();
        config
            .apply_overrides(env(&[
                ("KART_STORE_NAME", "Env Store"),
                ("KART_GST_RATE", "8.25"),
                ("KART_INVOICE_DIR", "/tmp/kart"),
            ]))
            .unwrap();

        assert_eq!(config.store_name, "Env Store");
        assert_eq!(config.gst_rate_bps, 825);
        assert_eq!(config.invoice_dir, PathBuf::from("/tmp/kart"));
    }

    #[test]
    fn test_bad_gst_override() {
        let mut config = ShopConfig::default();
        let err = config
            .apply_overrides(env(&[("KART_GST_RATE", "ten")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        assert!(config
            .apply_overrides(env(&[("KART_GST_RATE", "-1")]))
            .is_err());
        assert_eq!(config.gst_rate_bps, DEFAULT_GST_RATE_BPS);
    }

    #[test]
    fn test_validate_rejects_out_of_range_rate() {
        let config = ShopConfig {
            gst_rate_bps: 10_001,
            ..ShopConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_catalog() {
        let config = ShopConfig {
            products: vec![
                ProductConfig {
                    name: "Tea".to_string(),
                    price: 10,
                },
                ProductConfig {
                    name: "Tea".to_string(),
                    price: 12,
                },
            ],
            ..ShopConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Catalog(_))));
    }

    #[test]
    fn test_validate_rejects_huge_prices() {
        let yacht = |price| ShopConfig {
            products: vec![ProductConfig {
                name: "Yacht".to_string(),
                price,
            }],
            ..ShopConfig::default()
        };

        // Doesn't fit in paise at all
        assert!(matches!(
            yacht(1_000_000_000_000_000_000).validate(),
            Err(ConfigError::Catalog(ValidationError::TooLarge { .. }))
        ));

        // Fits, but a full cart line would overflow the subtotal
        assert!(matches!(
            yacht(100_000_000_000_000).validate(),
            Err(ConfigError::Catalog(ValidationError::TooLarge { .. }))
        ));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kart.toml");
        std::fs::write(&path, "gst_rate_bps = 1200\n").unwrap();

        let config = ShopConfig::from_file(&path).unwrap();
        assert_eq!(config.gst_rate_bps, 1200);

        let missing = ShopConfig::from_file(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Read { .. })));
    }
}
