// src/models.rs
pub mod field;
pub mod metadata;
pub mod run_stats;

pub use field::Field;
pub use metadata::Metadata;
pub use run_stats::{FileOutcome, RunStats};
