//! Entry point for the `storefront` binary. Setup lives in `lib.rs`.

use clap::Parser;
use storefront_cli::Args;

fn main() -> anyhow::Result<()> {
    storefront_cli::run(Args::parse())
}
