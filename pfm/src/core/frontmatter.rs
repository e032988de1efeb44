// src/core/frontmatter.rs
use anyhow::{Result, anyhow, bail};
use serde_yaml_ng::Value;
use std::path::Path;
use tracing::warn;

use crate::models::Metadata;

const DELIMITER: &str = "---";

/// True when the text, ignoring leading whitespace, opens with `---`.
#[inline]
#[must_use]
pub fn has_front_matter(content: &str) -> bool {
    content.trim_start().starts_with(DELIMITER)
}

/// The unparsed front-matter lines of a document and the text after them.
#[derive(Debug, PartialEq, Eq)]
pub struct RawBlock<'a> {
    pub lines: Vec<&'a str>,
    pub body: String,
    /// False when no closing `---` was found.
    pub closed: bool,
}

/// Splits a leading `---` block off `content`.
///
/// Returns `None` unless the very first line is `---`. An unclosed block
/// swallows the rest of the file: every following line is treated as front
/// matter, and the body is still everything after the opening delimiter.
#[must_use]
pub fn split_front_matter(content: &str) -> Option<RawBlock<'_>> {
    if !has_front_matter(content) {
        return None;
    }

    let lines: Vec<&str> = content.split('\n').collect();
    if lines.first().is_none_or(|first| first.trim() != DELIMITER) {
        return None;
    }

    let rest = lines.get(1..).unwrap_or_default();
    match rest.iter().position(|line| line.trim() == DELIMITER) {
        Some(end) => Some(RawBlock {
            lines: rest.get(..end).unwrap_or_default().to_vec(),
            body: rest.get(end.saturating_add(1)..).unwrap_or_default().join("\n"),
            closed: true,
        }),
        None => Some(RawBlock {
            lines: rest.to_vec(),
            body: rest.join("\n"),
            closed: false,
        }),
    }
}

/// Parses flat `key: value` lines.
///
/// Lines without a colon are skipped, quoted values are unwrapped, and a
/// repeated key keeps its last value. A line with nothing before its colon
/// is kept under the empty key so it survives a rewrite.
#[must_use]
pub fn parse_block(lines: &[&str]) -> Metadata {
    let mut record = Metadata::new();

    for line in lines {
        let Some((key, value)) = line.trim().split_once(':') else {
            continue;
        };
        record.insert(key.trim(), unquote(value.trim()));
    }

    record
}

fn unquote(value: &str) -> String {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            let inner = value.get(1..value.len().saturating_sub(1)).unwrap_or_default();
            return inner.replace(&format!("\\{quote}"), &quote.to_string());
        }
    }
    value.to_owned()
}

/// Front matter already present in a file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExistingFrontMatter {
    pub record: Metadata,
    /// The file with any leading block removed.
    pub body: String,
    /// Whether the file opened with a `---` block at all.
    pub present: bool,
}

/// Reads the leading block of `content`, never failing.
#[must_use]
pub fn parse_existing(content: &str, path: &Path) -> ExistingFrontMatter {
    let Some(block) = split_front_matter(content) else {
        return ExistingFrontMatter {
            record: Metadata::new(),
            body: content.to_owned(),
            present: false,
        };
    };

    if !block.closed {
        warn!(
            "{}: front matter has no closing '---'; treating the rest of the file as front matter",
            path.display()
        );
    }

    ExistingFrontMatter {
        record: parse_block(&block.lines),
        body: block.body,
        present: true,
    }
}

/// Renders `record` as a `---` delimited block, one `key: "value"` per line.
/// The result has no trailing newline.
#[must_use]
pub fn render(record: &Metadata) -> String {
    let mut lines = Vec::with_capacity(record.len().saturating_add(2));
    lines.push(DELIMITER.to_owned());
    for (key, value) in record.iter() {
        lines.push(format!("{key}: \"{}\"", value.replace('"', "\\\"")));
    }
    lines.push(DELIMITER.to_owned());
    lines.join("\n")
}

/// Checks that a rendered block is readable as a YAML mapping.
///
/// Only double quotes are escaped on output, so a value containing a
/// backslash can produce an invalid YAML escape sequence.
///
/// # Errors
///
/// Returns an error describing why the block is not a YAML mapping.
pub fn validate_rendered(block: &str) -> Result<()> {
    let inner: Vec<&str> = block
        .split('\n')
        .filter(|line| line.trim() != DELIMITER)
        .collect();
    let value: Value = serde_yaml_ng::from_str(&inner.join("\n"))
        .map_err(|e| anyhow!("Rendered front matter is not valid YAML: {e}"))?;

    match value {
        Value::Mapping(_) | Value::Null => Ok(()),
        _ => bail!("Rendered front matter is not a key/value mapping"),
    }
}
