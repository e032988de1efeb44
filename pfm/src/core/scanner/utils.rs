// src/core/scanner/utils.rs
use crate::config::Config;
use crate::utils::is_hidden;

/// Determines if a directory entry should be pruned from the walk:
/// - hidden files and directories, unless the config includes them
/// - directories named in `exclude_dirs`
///
/// The walk root itself is never excluded.
pub fn should_exclude(entry: &walkdir::DirEntry, config: &Config) -> bool {
    if entry.depth() == 0 {
        return false;
    }

    if !config.include_hidden && is_hidden(entry) {
        return true;
    }

    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| config.exclude_dirs.iter().any(|dir| dir == name))
}
