// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::load_config;
use crate::core::merge::MergeMode;
use crate::core::scanner::{RunOptions, update_directory};
use crate::models::RunStats;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Proposals directory to scan
    #[arg(short, long, default_value = "proposals")]
    pub directory: PathBuf,

    /// Overwrite existing front matter values with extracted metadata
    /// (default: only add missing fields)
    #[arg(long)]
    pub overwrite: bool,

    /// Report which files would change without writing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Configuration file (defaults to <directory>/.pfm.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<RunStats> {
    let config = load_config(&args.directory, args.config.as_deref())?;
    let options = RunOptions {
        mode: MergeMode::from_overwrite(args.overwrite || config.overwrite),
        dry_run: args.dry_run,
    };

    let stats = update_directory(&args.directory, &config, options)?;

    if stats.scanned == 0 {
        println!("No proposal markdown files found to process");
    } else if stats.updated == 0 {
        println!("No files needed front matter updates");
    } else if args.dry_run {
        println!("Would update front matter for {} files", stats.updated);
    } else {
        println!("Updated front matter for {} files", stats.updated);
    }
    if stats.failed > 0 {
        println!("{} files could not be processed", stats.failed);
    }

    Ok(stats)
}
