//! # testgen - command-line entry point
//!
//! ## Initialization Sequence
//!
//! 1. **Tracing** - `RUST_LOG` filter, `info` by default
//! 2. **Arguments** - parsed with clap
//! 3. **Configuration** - defaults, global, project, environment
//! 4. **Command** - dispatched to its handler
//!
//! ## Error Handling
//!
//! All steps return `Result` and failures halt with a clear error message.

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![forbid(clippy::panic)]
#![deny(clippy::expect_used)]

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use testgen::cli::Cli;
use testgen::commands::execute_command;
use testgen_core::load_config;

fn main() -> Result<()> {
    let start_time = Instant::now();

    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).context(
        "Configuration failed to load. Check .testgen.toml and TESTGEN_* environment variables",
    )?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(cli.command, &config, &mut out)?;

    info!(elapsed_ms = start_time.elapsed().as_millis(), "testgen finished");
    Ok(())
}

/// Initialize tracing with an env filter; logs go to stderr so stdout stays
/// clean for rendered output.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
