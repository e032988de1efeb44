// src/core/extract.rs
use anyhow::{Context as _, Result};
use regex::Regex;
use std::sync::LazyLock;

use crate::models::{Field, Metadata};

static STANDARD: LazyLock<FieldMatchers> =
    LazyLock::new(|| FieldMatchers::new().expect("built-in patterns are valid"));

const LINK_PATTERN: &str = r"\[([^\]]+)\]\([^)]+\)";
const WHITESPACE_PATTERN: &str = r"\s+";
const BOLD_PATTERN: &str = r"\*\*([^*]+)\*\*";

fn compile(pattern: &str, what: &str) -> Result<Regex> {
    Regex::new(pattern).with_context(|| format!("Invalid pattern for {what}: {pattern}"))
}

/// Compiled `* Name: value` matchers, one per bullet field, plus the
/// patterns used to clean captured values.
#[derive(Debug)]
pub struct FieldMatchers {
    matchers: Vec<(Field, Regex)>,
    link: Regex,
    whitespace: Regex,
    bold: Regex,
}

impl FieldMatchers {
    /// Compiles the bullet matchers in [`Field::BULLETS`] order.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the patterns fails to compile.
    pub fn new() -> Result<Self> {
        let matchers = Field::BULLETS
            .into_iter()
            .filter_map(|field| field.bullet_pattern().map(|pattern| (field, pattern)))
            .map(|(field, pattern)| compile(pattern, field.key()).map(|re| (field, re)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            matchers,
            link: compile(LINK_PATTERN, "links")?,
            whitespace: compile(WHITESPACE_PATTERN, "whitespace")?,
            bold: compile(BOLD_PATTERN, "bold text")?,
        })
    }

    /// The shared matcher table, compiled on first use.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Returns the field a trimmed line opens, with its raw captured value.
    #[must_use]
    pub fn match_start<'a>(&self, trimmed: &'a str) -> Option<(Field, &'a str)> {
        self.matchers.iter().find_map(|(field, re)| {
            re.captures(trimmed)
                .and_then(|caps| caps.get(1))
                .map(|m| (*field, m.as_str()))
        })
    }

    fn clean_value(&self, field: Field, value: &str) -> String {
        let value = value.trim();
        match field {
            Field::Author | Field::Sponsor => {
                let unlinked = self.link.replace_all(value, "$1");
                self.whitespace.replace_all(&unlinked, " ").into_owned()
            }
            Field::Status => self.bold.replace_all(value, "$1").into_owned(),
            Field::Title | Field::Proposal | Field::PlannedVersion => value.to_owned(),
        }
    }
}

/// What one pass over a file's body produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub title: Option<String>,
    pub fields: Metadata,
}

impl Extracted {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.fields.is_empty()
    }
}

#[must_use]
pub fn extract(content: &str, matchers: &FieldMatchers) -> Extracted {
    Extracted {
        title: extract_title(content),
        fields: extract_metadata(content, matchers),
    }
}

/// Returns the text of the first `# ` heading anywhere in the file.
#[must_use]
pub fn extract_title(content: &str) -> Option<String> {
    content
        .split('\n')
        .map(str::trim)
        .find(|line| line.starts_with("# "))
        .map(|line| line.get(2..).unwrap_or_default().trim().to_owned())
}

/// Scanner position relative to the bullet block.
enum Scan {
    /// No field seen yet; a `##` heading ends the scan.
    Searching,
    /// Inside a field; indented lines extend its value.
    InField { field: Field, value: String },
    /// A field has closed; only another field start is of interest.
    AfterField,
}

impl Scan {
    /// Feeds one raw line. `None` stops the scan.
    fn step(self, raw: &str, matchers: &FieldMatchers, out: &mut Metadata) -> Option<Self> {
        let trimmed = raw.trim();

        if let Some((field, captured)) = matchers.match_start(trimmed) {
            self.finish(matchers, out);
            return Some(Self::InField {
                field,
                value: captured.trim().to_owned(),
            });
        }

        match self {
            Self::Searching if trimmed.starts_with("##") => None,
            Self::Searching => Some(Self::Searching),
            Self::InField { field, mut value } => {
                if is_continuation(raw, trimmed) {
                    value.push(' ');
                    value.push_str(trimmed);
                    Some(Self::InField { field, value })
                } else {
                    commit(matchers, field, &value, out);
                    Some(Self::AfterField)
                }
            }
            Self::AfterField => Some(Self::AfterField),
        }
    }

    fn finish(self, matchers: &FieldMatchers, out: &mut Metadata) {
        if let Self::InField { field, value } = self {
            commit(matchers, field, &value, out);
        }
    }
}

// Field starts are checked before this is called.
fn is_continuation(raw: &str, trimmed: &str) -> bool {
    !trimmed.is_empty() && !trimmed.starts_with("##") && raw.starts_with("    ")
}

fn commit(matchers: &FieldMatchers, field: Field, value: &str, out: &mut Metadata) {
    if value.is_empty() {
        return;
    }
    let cleaned = matchers.clean_value(field, value);
    if !cleaned.trim().is_empty() {
        out.insert(field.key(), cleaned);
    }
}

/// Collects bullet metadata from the top of a proposal.
///
/// A field's value continues over following lines indented by at least four
/// spaces. Before any field has been seen, a `##` heading ends the scan.
/// When a field appears more than once, the last occurrence wins.
#[must_use]
pub fn extract_metadata(content: &str, matchers: &FieldMatchers) -> Metadata {
    let mut out = Metadata::new();
    let mut state = Scan::Searching;

    for line in content.split('\n') {
        match state.step(line, matchers, &mut out) {
            Some(next) => state = next,
            None => return out,
        }
    }

    state.finish(matchers, &mut out);
    out
}
