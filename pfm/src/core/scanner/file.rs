// src/core/scanner/file.rs
use anyhow::{Context as _, Result, bail};
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{error, info};

use crate::core::extract::FieldMatchers;
use crate::core::merge::{MergeMode, Update, plan_update};
use crate::models::FileOutcome;

/// Updates the front matter of one file.
///
/// Read and write failures are logged and reported as
/// [`FileOutcome::Failed`]; they never propagate.
#[must_use]
pub fn process_file(
    path: &Path,
    mode: MergeMode,
    dry_run: bool,
    matchers: &FieldMatchers,
) -> FileOutcome {
    match update_file(path, mode, dry_run, matchers) {
        Ok(true) => FileOutcome::Updated,
        Ok(false) => FileOutcome::Unchanged,
        Err(e) => {
            error!("{e:#}");
            FileOutcome::Failed
        }
    }
}

fn update_file(
    path: &Path,
    mode: MergeMode,
    dry_run: bool,
    matchers: &FieldMatchers,
) -> Result<bool> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Error reading {}", path.display()))?;

    let Update::Rewrite(new_content) = plan_update(&content, path, mode, matchers) else {
        return Ok(false);
    };

    if dry_run {
        info!("Would update {}", path.display());
    } else {
        write_atomically(path, &new_content)?;
        info!("Updated {}", path.display());
    }
    Ok(true)
}

/// Replaces the contents of `path` through a temporary file next to the
/// real target, keeping the original permissions. Symlinks are resolved
/// first so the link itself is left in place.
///
/// # Errors
///
/// This function may return an error if:
/// * The target cannot be resolved or its metadata cannot be read
/// * The target is read-only
/// * The temporary file cannot be created or written
/// * The temporary file cannot be renamed over the target
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let target = fs::canonicalize(path)
        .with_context(|| format!("Error writing {}", path.display()))?;

    let permissions = fs::metadata(&target)
        .with_context(|| format!("Error writing {}", path.display()))?
        .permissions();
    if permissions.readonly() {
        bail!("Error writing {}: file is read-only", path.display());
    }

    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Error writing {}: cannot create temp file", path.display()))?;
    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.as_file().set_permissions(permissions))
        .with_context(|| format!("Error writing {}", path.display()))?;
    tmp.persist(&target)
        .map_err(|e| e.error)
        .with_context(|| format!("Error writing {}", path.display()))?;

    Ok(())
}
