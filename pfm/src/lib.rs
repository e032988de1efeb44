// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
mod utils;

pub use crate::cli::{Args, run};
pub use crate::config::{CONFIG_FILE, Config, load_config, parse_config};
pub use crate::core::extract::{Extracted, FieldMatchers, extract, extract_metadata, extract_title};
pub use crate::core::frontmatter::{
    ExistingFrontMatter, has_front_matter, parse_block, parse_existing, render,
};
pub use crate::core::ignore::Patterns;
pub use crate::core::merge::{Conflict, MergeMode, MergePlan, Update, find_conflicts, merge, plan_update};
pub use crate::core::scanner::{
    RunOptions, collect_candidates, process_file, update_directory, write_atomically,
};
pub use crate::models::{Field, FileOutcome, Metadata, RunStats};
