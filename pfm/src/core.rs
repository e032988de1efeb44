// src/core.rs
pub mod extract;
pub mod frontmatter;
pub mod ignore;
pub mod merge;
pub mod scanner;
