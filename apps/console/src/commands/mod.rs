//! # Console Commands Module
//!
//! Every action the console can perform, as plain functions.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Product listing
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── order.rs    ◄─── Order placement and invoice download
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Console line                                                           │
//! │  ────────────                                                           │
//! │  > add Apple 3                                                          │
//! │         │                                                               │
//! │         │ (parsed by console.rs)                                        │
//! │         ▼                                                               │
//! │  Command function                                                       │
//! │  ────────────────                                                       │
//! │  fn add_to_cart(                                                        │
//! │      shop: &ShopState,           ◄── Read-only shop services           │
//! │      session: &mut SessionState, ◄── This session's cart               │
//! │      product_name: &str,                                                │
//! │      quantity: Option<i64>,      ◄── Optional param (default 1)        │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (text or JSON rendering)                                      │
//! │         ▼                                                               │
//! │  stdout                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the shop
//! fn list_products(shop: &ShopState)
//!
//! // Only needs the session
//! fn remove_from_cart(shop: &ShopState, session: &mut SessionState, ..)
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod order;
