// src/models/run_stats.rs

/// Per-file result of a front-matter update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Updated,
    Unchanged,
    Failed,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub scanned: u64,
    pub updated: u64,
    pub unchanged: u64,
    pub failed: u64,
}

impl RunStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scanned: 0,
            updated: 0,
            unchanged: 0,
            failed: 0,
        }
    }

    #[inline]
    pub fn record(&mut self, outcome: FileOutcome) {
        self.scanned = self.scanned.saturating_add(1);
        match outcome {
            FileOutcome::Updated => self.updated = self.updated.saturating_add(1),
            FileOutcome::Unchanged => self.unchanged = self.unchanged.saturating_add(1),
            FileOutcome::Failed => self.failed = self.failed.saturating_add(1),
        }
    }
}
