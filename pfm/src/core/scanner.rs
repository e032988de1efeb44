// src/core/scanner.rs
pub mod file;
#[cfg(test)]
pub mod test_utils;
pub mod utils;

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::core::extract::FieldMatchers;
use crate::core::ignore::Patterns;
use crate::core::merge::MergeMode;
use crate::models::RunStats;
use crate::utils::has_extension;

pub use file::{process_file, write_atomically};
use utils::should_exclude;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: MergeMode,
    pub dry_run: bool,
}

/// Lists the proposal files under `root`, sorted by path.
///
/// # Arguments
///
/// * `root` - The directory to walk
/// * `config` - Extension, excluded directories, reserved names and ignore globs
///
/// # Errors
///
/// Returns an error if an ignore pattern is invalid. Entries that cannot be
/// read during the walk are logged and skipped.
pub fn collect_candidates(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let ignore_patterns = Patterns::from_lines(&config.ignore)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !should_exclude(e, config))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !has_extension(path, &config.extension) {
            continue;
        }
        if path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| config.skip_files.iter().any(|skip| skip == name))
        {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        if ignore_patterns.matches(relative) {
            debug!("Ignoring {}", relative.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Adds or merges front matter for every proposal under `root`, one file at
/// a time in path order.
///
/// # Errors
///
/// This function may return an error if:
/// * `root` does not exist or is not a directory
/// * An ignore pattern in the configuration is invalid
///
/// Failures on individual files are counted in [`RunStats::failed`].
pub fn update_directory(root: &Path, config: &Config, options: RunOptions) -> Result<RunStats> {
    if !root.is_dir() {
        bail!("Proposals directory not found at {}", root.display());
    }

    let files = collect_candidates(root, config)?;
    let matchers = FieldMatchers::standard();
    let mut stats = RunStats::new();

    for path in &files {
        stats.record(process_file(path, options.mode, options.dry_run, matchers));
    }

    Ok(stats)
}
