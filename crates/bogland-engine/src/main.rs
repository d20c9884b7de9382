//! # Bogland Engine
//!
//! Command-line entry point: loads settings, generates one map and logs what
//! it contains.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod app;
mod config;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Main entry point.
fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("bogland=info".parse()?))
        .init();

    info!("Bogland starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let command = app::Command::parse(std::env::args().skip(1))?;
    app::run(command)?;

    info!("Bogland done");
    Ok(())
}
