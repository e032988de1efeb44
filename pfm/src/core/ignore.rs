// src/core/ignore.rs
use anyhow::{Context as _, Result};
use glob::Pattern;
use std::path::Path;

/// Gitignore-flavoured glob list applied to paths relative to the scanned root.
#[derive(Debug, Default)]
pub struct Patterns {
    /// (pattern, is_negation)
    patterns: Vec<(Pattern, bool)>,
}

impl Patterns {
    /// Compiles every entry of `lines`.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry is not a valid glob.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Self::default();
        for line in lines {
            patterns.add_pattern(line.as_ref())?;
        }
        Ok(patterns)
    }

    /// Adds one pattern.
    ///
    /// - `!` negates: a matching path is never ignored
    /// - a leading `/` anchors the pattern to the root
    /// - a trailing `/` matches everything below a directory
    /// - a pattern without `/` matches at any depth
    ///
    /// Blank entries and `#` comments are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern contains invalid glob syntax.
    pub fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        let pattern = pattern.trim();
        if pattern.is_empty() || pattern.starts_with('#') {
            return Ok(());
        }

        let (pattern, is_negation) = pattern
            .strip_prefix('!')
            .map_or((pattern, false), |stripped| (stripped, true));
        let (pattern, is_anchored) = pattern
            .strip_prefix('/')
            .map_or((pattern, false), |stripped| (stripped, true));

        let mut glob_pattern = match pattern.strip_suffix('/') {
            Some(dir) => format!("{dir}/**"),
            None => pattern.to_owned(),
        };
        if !is_anchored && !pattern.trim_end_matches('/').contains('/') {
            glob_pattern = format!("**/{glob_pattern}");
        }

        let compiled = Pattern::new(&glob_pattern)
            .with_context(|| format!("Invalid ignore pattern: {pattern}"))?;
        self.patterns.push((compiled, is_negation));
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Negations are checked first and always win.
    pub fn matches(&self, relative: impl AsRef<Path>) -> bool {
        let path = relative.as_ref().to_string_lossy().replace('\\', "/");

        if self
            .patterns
            .iter()
            .any(|(pattern, is_neg)| *is_neg && pattern.matches(&path))
        {
            return false;
        }

        self.patterns
            .iter()
            .any(|(pattern, is_neg)| !is_neg && pattern.matches(&path))
    }
}
