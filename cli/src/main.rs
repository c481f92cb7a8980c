//! `mdt` - convert tables between Markdown and CSV.
//!
//! Usage:
//!   mdt md --align lcr < data.csv
//!   mdt csv -f table.md
//!   mdt fmt -f table.md
//!
//! Converted output goes to stdout, logs go to stderr.

use std::io;

use anyhow::Result;
use clap::Parser;
use mdt_cli::Args;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    mdt_cli::run(&args)
}
