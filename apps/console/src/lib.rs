//! # Kart Console Library
//!
//! Startup and wiring for the `kart` binary. Everything except `main` lives
//! here so the commands and the console loop can be tested.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    kart startup                                         │
//! │                                                                         │
//! │  1. Parse CLI flags (clap)                                             │
//! │  2. Initialize tracing (stderr, RUST_LOG)                              │
//! │  3. Load ShopConfig (file → env → --invoice-dir)                       │
//! │  4. Build ShopState (catalog, GST generator, invoice store)            │
//! │  5. Run the console on stdin/stdout until quit or EOF                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod console;
pub mod error;
pub mod state;

use console::{Console, OutputFormat};
use state::{ShopConfig, ShopState};

/// Single-session shopping cart with GST invoices.
#[derive(Debug, Parser)]
#[command(name = "kart", version, about)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory to write invoice files to (overrides config)
    #[arg(long, value_name = "DIR")]
    pub invoice_dir: Option<PathBuf>,

    /// Print command results as JSON lines
    #[arg(long)]
    pub json: bool,
}

/// Runs one shopping session.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing();

    let mut config = ShopConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(dir) = cli.invoice_dir {
        config.invoice_dir = dir;
        config.validate().context("Invalid --invoice-dir")?;
    }

    let shop = ShopState::from_config(config)?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    info!(format = ?format, "Starting console session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(&shop, stdin.lock(), stdout.lock(), format)
        .run()
        .context("Console I/O failed")?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout stays the display surface.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - `RUST_LOG=kart_store=debug` - Show invoice file activity only
/// - Default: errors only
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
