//! # Invoice Store
//!
//! Writes rendered invoices to `<dir>/<name>.txt` and reads them back for the
//! download surface.
//!
//! ## Artifact Flow
//! ```text
//! place_order("march")
//!      │
//!      ▼
//! validate_invoice_filename("march")  ── rejected? nothing is written
//!      │
//!      ▼
//! <dir>/march.txt  ◄── Invoice::render()  (UTF-8, overwrites)
//!      │
//!      ▼
//! download("march.txt") ──► bytes
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use kart_core::validation::validate_invoice_filename;
use kart_core::Invoice;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

/// Extension given to every invoice artifact.
pub const INVOICE_EXTENSION: &str = "txt";

/// A written invoice file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceArtifact {
    /// File name under the store directory, e.g. `march.txt`.
    pub file_name: String,

    /// Full path of the file.
    pub path: PathBuf,

    /// Bytes written.
    pub size: u64,
}

/// Directory-backed invoice storage.
#[derive(Debug, Clone)]
pub struct InvoiceStore {
    dir: PathBuf,
}

impl InvoiceStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;
        debug!(dir = %dir.display(), "Invoice store opened");
        Ok(InvoiceStore { dir })
    }

    /// Directory the artifacts live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolves a user-supplied name (with or without `.txt`) to its
    /// artifact file name.
    ///
    /// ## Example
    /// ```rust
    /// use kart_store::InvoiceStore;
    ///
    /// assert_eq!(InvoiceStore::artifact_name(" march ").unwrap(), "march.txt");
    /// assert_eq!(InvoiceStore::artifact_name("march.txt").unwrap(), "march.txt");
    /// assert!(InvoiceStore::artifact_name("   ").is_err());
    /// ```
    pub fn artifact_name(name: &str) -> StoreResult<String> {
        let trimmed = name.trim();
        let stem = trimmed
            .strip_suffix(".txt")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(trimmed);
        let stem = validate_invoice_filename(stem)?;
        Ok(format!("{}.{}", stem, INVOICE_EXTENSION))
    }

    /// Writes the rendered invoice as `<name>.txt`.
    ///
    /// The name is validated before anything touches the disk. An existing
    /// file with the same name is overwritten.
    pub fn save(&self, name: &str, invoice: &Invoice) -> StoreResult<InvoiceArtifact> {
        let file_name = Self::artifact_name(name)?;
        let path = self.dir.join(&file_name);
        let text = invoice.render();

        fs::write(&path, text.as_bytes()).map_err(|e| StoreError::io(&path, e))?;

        info!(
            invoice_number = %invoice.invoice_number,
            path = %path.display(),
            bytes = text.len(),
            "Invoice written"
        );

        Ok(InvoiceArtifact {
            file_name,
            path,
            size: text.len() as u64,
        })
    }

    /// Reads an artifact back for download.
    pub fn read(&self, name: &str) -> StoreResult<Vec<u8>> {
        let file_name = Self::artifact_name(name)?;
        let path = self.dir.join(&file_name);

        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound { file_name }),
            Err(e) => Err(StoreError::io(&path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kart_core::{Cart, Catalog, Customer, InvoiceGenerator, ValidationError};
    use tempfile::TempDir;

    fn sample_invoice() -> Invoice {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add(&catalog, "Apple", 3).unwrap();
        cart.add(&catalog, "Banana", 2).unwrap();

        let customer = Customer::new("John Smith", "9876543210").unwrap();
        let issued_at = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        InvoiceGenerator::default()
            .generate(&customer, &cart.snapshot(), issued_at)
            .unwrap()
    }

    #[test]
    fn test_open_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("invoices");

        let store = InvoiceStore::open(&dir).unwrap();

        assert!(dir.is_dir());
        assert_eq!(store.dir(), dir.as_path());
    }

    #[test]
    fn test_save_writes_rendered_text() {
        let tmp = TempDir::new().unwrap();
        let store = InvoiceStore::open(tmp.path()).unwrap();
        let invoice = sample_invoice();

        let artifact = store.save("march", &invoice).unwrap();

        assert_eq!(artifact.file_name, "march.txt");
        assert_eq!(artifact.path, tmp.path().join("march.txt"));
        let written = fs::read_to_string(&artifact.path).unwrap();
        assert_eq!(written, invoice.render());
        assert_eq!(artifact.size, written.len() as u64);
        assert!(written.contains("Total Amount: ₹352.00"));
    }

    #[test]
    fn test_save_rejects_blank_name_without_writing() {
        let tmp = TempDir::new().unwrap();
        let store = InvoiceStore::open(tmp.path()).unwrap();

        let err = store.save("   ", &sample_invoice()).unwrap_err();

        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::Required { .. })
        ));
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_save_rejects_paths() {
        let tmp = TempDir::new().unwrap();
        let store = InvoiceStore::open(tmp.path().join("inv")).unwrap();

        assert!(store.save("../escape", &sample_invoice()).is_err());
        assert!(!tmp.path().join("escape.txt").exists());
    }

    #[test]
    fn test_save_overwrites() {
        let tmp = TempDir::new().unwrap();
        let store = InvoiceStore::open(tmp.path()).unwrap();
        fs::write(tmp.path().join("march.txt"), "old").unwrap();

        store.save("march", &sample_invoice()).unwrap();

        let written = fs::read_to_string(tmp.path().join("march.txt")).unwrap();
        assert!(written.starts_with("********** INVOICE **********"));
    }

    #[test]
    fn test_save_does_not_double_extension() {
        let tmp = TempDir::new().unwrap();
        let store = InvoiceStore::open(tmp.path()).unwrap();

        let artifact = store.save(" march.txt ", &sample_invoice()).unwrap();

        assert_eq!(artifact.file_name, "march.txt");
        assert!(tmp.path().join("march.txt").is_file());
        assert!(!tmp.path().join("march.txt.txt").exists());
    }

    #[test]
    fn test_read_round_trip() {
        let tmp = TempDir::new().unwrap();
        let store = InvoiceStore::open(tmp.path()).unwrap();
        let invoice = sample_invoice();
        store.save("april", &invoice).unwrap();

        assert_eq!(store.read("april.txt").unwrap(), invoice.render().into_bytes());
        assert_eq!(store.read("april").unwrap(), invoice.render().into_bytes());
    }

    #[test]
    fn test_read_missing() {
        let tmp = TempDir::new().unwrap();
        let store = InvoiceStore::open(tmp.path()).unwrap();

        assert!(matches!(
            store.read("nothing"),
            Err(StoreError::NotFound { file_name }) if file_name == "nothing.txt"
        ));
    }

    #[test]
    fn test_artifact_name() {
        assert_eq!(InvoiceStore::artifact_name("order 7").unwrap(), "order 7.txt");
        // A bare ".txt" keeps its text as the stem
        assert_eq!(InvoiceStore::artifact_name(".txt").unwrap(), ".txt.txt");
        assert!(InvoiceStore::artifact_name("").is_err());
    }
}
