// src/utils.rs
use std::path::Path;

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

/// Compares the extension case-insensitively; `ext` may carry a leading dot.
pub fn has_extension(path: &Path, ext: &str) -> bool {
    let ext = ext.trim_start_matches('.');
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}
