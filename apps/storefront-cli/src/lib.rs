//! # storefront-cli: Interactive Console Shop
//!
//! Thin orchestration layer over `storefront-core`.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Parse arguments (clap) ───────────────────────────────────────────► │
//! │  2. Load StoreConfig (defaults → TOML → env → validate) ──────────────► │
//! │  3. Initialize logging (stderr, RUST_LOG or config filter) ───────────► │
//! │  4. Seed catalog (--catalog JSON or built-in products) ───────────────► │
//! │  5. Create Session ───────────────────────────────────────────────────► │
//! │  6. Run Shell on stdin/stdout until exit or end of input ─────────────► │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use storefront_core::Session;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod error;
pub mod render;
pub mod seed;
pub mod shell;

use config::StoreConfig;
use shell::Shell;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Interactive in-memory shop")]
pub struct Args {
    /// JSON catalog seed file; the built-in products are used when omitted
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, env = "STOREFRONT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Runs the console shop until the user exits.
pub fn run(args: Args) -> anyhow::Result<()> {
    let config = StoreConfig::load(args.config.as_deref()).context("Failed to load store configuration")?;
    init_tracing(&config.logging.filter);

    let catalog = match args.catalog.as_deref() {
        Some(path) => seed::load_catalog(path)?,
        None => seed::default_catalog()?,
    };
    info!(products = catalog.len(), store = %config.store.name, "Storefront ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(Session::new(catalog), config, stdin.lock(), stdout.lock());
    shell.run()?;

    Ok(())
}

/// Initializes tracing on stderr so log lines never mix with the menu.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show all debug messages
/// - `RUST_LOG=storefront_core=debug` - Stock and cart events only
/// - Default: the `[logging] filter` from the config
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_parse_catalog() {
        let args = Args::try_parse_from(["storefront", "--catalog", "shop.json"]).unwrap();
        assert_eq!(args.catalog, Some(PathBuf::from("shop.json")));

        let args = Args::try_parse_from(["storefront", "-c", "other.json"]).unwrap();
        assert_eq!(args.catalog, Some(PathBuf::from("other.json")));
    }
}
