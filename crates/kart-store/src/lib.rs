//! # kart-store: Invoice Artifact Storage for Kart
//!
//! This crate is the only place Kart touches the filesystem. kart-core
//! produces an [`Invoice`](kart_core::Invoice); this crate writes its
//! rendered text to `<name>.txt` and hands it back for download.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Kart Data Flow                                 │
//! │                                                                         │
//! │  Console command (place_order)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  kart-store (THIS CRATE)                         │   │
//! │  │                                                                 │   │
//! │  │   InvoiceStore::save("march", &invoice)                         │   │
//! │  │   InvoiceStore::read("march.txt")                               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Invoice directory (KART_INVOICE_DIR)              │   │
//! │  │   march.txt   april.txt   ...                                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kart_store::InvoiceStore;
//!
//! let store = InvoiceStore::open("./invoices")?;
//! let artifact = store.save("march", &invoice)?;
//! let bytes = store.read(&artifact.file_name)?;
//! ```

pub mod error;
pub mod invoices;

pub use error::{StoreError, StoreResult};
pub use invoices::{InvoiceArtifact, InvoiceStore, INVOICE_EXTENSION};
