// src/models/field.rs
use std::fmt;

/// A front-matter field this tool knows how to fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Proposal,
    Author,
    Sponsor,
    Status,
    PlannedVersion,
}

impl Field {
    /// Order in which newly introduced keys are appended to the front matter.
    pub const CANONICAL: [Self; 6] = [
        Self::Title,
        Self::Proposal,
        Self::Author,
        Self::Sponsor,
        Self::Status,
        Self::PlannedVersion,
    ];

    /// Fields read from `* Name: value` bullets, in matcher priority order.
    pub const BULLETS: [Self; 5] = [
        Self::Proposal,
        Self::Author,
        Self::Sponsor,
        Self::Status,
        Self::PlannedVersion,
    ];

    #[inline]
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Proposal => "proposal",
            Self::Author => "author",
            Self::Sponsor => "sponsor",
            Self::Status => "status",
            Self::PlannedVersion => "planned_version",
        }
    }

    /// Case-insensitive pattern for the field's `* Name: value` bullet.
    /// Capture group 1 holds the raw value. The title has no bullet.
    #[inline]
    #[must_use]
    pub const fn bullet_pattern(self) -> Option<&'static str> {
        match self {
            Self::Title => None,
            Self::Proposal => Some(r"(?i)^\*\s*Proposal:\s*\[([^\]]+)\]"),
            Self::Author => Some(r"(?i)^\*\s*Author\(s\):\s*(.+)$"),
            Self::Sponsor => Some(r"(?i)^\*\s*Sponsor:\s*(.+)$"),
            Self::Status => Some(r"(?i)^\*\s*Status:\s*(.+)$"),
            Self::PlannedVersion => Some(r"(?i)^\*\s*Planned\s+Version:\s*(.+)$"),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
