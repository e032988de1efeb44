// src/core/merge.rs
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::core::extract::{Extracted, FieldMatchers, extract};
use crate::core::frontmatter::{parse_existing, render, validate_rendered};
use crate::models::{Field, Metadata};

/// Which side wins when a key exists in both the file and the extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeMode {
    /// Existing front matter wins; only missing keys are added.
    #[default]
    Preserve,
    /// Extracted values replace existing ones.
    Overwrite,
}

impl MergeMode {
    #[inline]
    #[must_use]
    pub const fn from_overwrite(overwrite: bool) -> Self {
        if overwrite { Self::Overwrite } else { Self::Preserve }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub key: &'static str,
    pub existing: String,
    pub extracted: String,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: existing='{}' vs extracted='{}'",
            self.key, self.existing, self.extracted
        )
    }
}

/// Extracted values in canonical order, title first.
fn extracted_values(extracted: &Extracted) -> impl Iterator<Item = (Field, &str)> {
    Field::CANONICAL.into_iter().filter_map(move |field| {
        let value = match field {
            Field::Title => extracted.title.as_deref(),
            _ => extracted.fields.get(field.key()),
        };
        value.map(|v| (field, v))
    })
}

#[must_use]
pub fn find_conflicts(existing: &Metadata, extracted: &Extracted) -> Vec<Conflict> {
    extracted_values(extracted)
        .filter_map(|(field, value)| {
            existing
                .get(field.key())
                .filter(|old| *old != value)
                .map(|old| Conflict {
                    key: field.key(),
                    existing: old.to_owned(),
                    extracted: value.to_owned(),
                })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    /// Existing keys in their original order, then new keys in canonical order.
    pub record: Metadata,
    /// Keys added or given a new value.
    pub changed_keys: Vec<&'static str>,
    pub conflicts: Vec<Conflict>,
}

impl MergePlan {
    #[inline]
    #[must_use]
    pub fn is_change(&self) -> bool {
        !self.changed_keys.is_empty()
    }
}

#[must_use]
pub fn merge(existing: &Metadata, extracted: &Extracted, mode: MergeMode) -> MergePlan {
    let conflicts = find_conflicts(existing, extracted);
    let mut record = existing.clone();
    let mut changed_keys = Vec::new();

    for (field, value) in extracted_values(extracted) {
        let key = field.key();
        let replace = match existing.get(key) {
            None => true,
            Some(old) => mode == MergeMode::Overwrite && old != value,
        };
        if replace {
            record.insert(key, value);
            changed_keys.push(key);
        }
    }

    MergePlan {
        record,
        changed_keys,
        conflicts,
    }
}

/// What should happen to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    Unchanged,
    Rewrite(String),
}

/// Decides the new contents for a file without touching the filesystem.
///
/// `path` is only used to label diagnostics.
#[must_use]
pub fn plan_update(
    content: &str,
    path: &Path,
    mode: MergeMode,
    matchers: &FieldMatchers,
) -> Update {
    let extracted = extract(content, matchers);
    let existing = parse_existing(content, path);

    if !existing.present && extracted.is_empty() {
        return Update::Unchanged;
    }

    let plan = merge(&existing.record, &extracted, mode);
    for conflict in &plan.conflicts {
        match mode {
            MergeMode::Preserve => {
                warn!("{} has conflicting metadata - {conflict}", path.display());
            }
            MergeMode::Overwrite => {
                info!(
                    "{} - overwriting conflicting metadata - {conflict}",
                    path.display()
                );
            }
        }
    }

    if !plan.is_change() {
        return Update::Unchanged;
    }
    debug!(
        "{}: setting {}",
        path.display(),
        plan.changed_keys.join(", ")
    );

    let block = render(&plan.record);
    if let Err(e) = validate_rendered(&block) {
        warn!("{}: {e:#}", path.display());
    }

    Update::Rewrite(format!("{block}\n{}", existing.body))
}
