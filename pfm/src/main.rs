// src/main.rs
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pfm::{Args, run};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    run(args)?;
    Ok(())
}
