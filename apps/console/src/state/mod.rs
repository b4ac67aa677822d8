//! # State Module
//!
//! Manages application state for the console app.
//!
//! ## Two State Types
//! Shop-wide settings and the per-session cart have different lifetimes, so
//! they live in separate types and commands borrow exactly what they need.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      run(cli)                                   │   │
//! │  │  let shop = ShopState::from_config(config)?;                    │   │
//! │  │  let mut session = SessionState::new();                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │               ┌──────────────┴───────────────┐                          │
//! │               ▼                              ▼                          │
//! │  ┌──────────────────────────┐   ┌──────────────────────────┐            │
//! │  │   ShopState  (&)         │   │   SessionState  (&mut)   │            │
//! │  │                          │   │                          │            │
//! │  │  config                  │   │  cart                    │            │
//! │  │  catalog                 │   │  invoices written        │            │
//! │  │  generator (GST rate)    │   │                          │            │
//! │  │  store (invoice dir)     │   │                          │            │
//! │  └──────────────────────────┘   └──────────────────────────┘            │
//! │                                                                         │
//! │  OWNERSHIP:                                                            │
//! │  • ShopState: read-only after startup, shared by reference             │
//! │  • SessionState: owned by the console loop, one per session            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;
mod shop;

pub use config::{ConfigError, ConfigResult, ProductConfig, ShopConfig};
pub use session::SessionState;
pub use shop::ShopState;
