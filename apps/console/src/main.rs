//! # Kart Entry Point
//!
//! The setup lives in lib.rs for testability.

use clap::Parser;
use kart_console_lib::Cli;

fn main() -> anyhow::Result<()> {
    kart_console_lib::run(Cli::parse())
}
