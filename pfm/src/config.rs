// src/config.rs
use anyhow::{Context as _, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Name of the optional per-directory configuration file.
pub const CONFIG_FILE: &str = ".pfm.toml";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File extension of proposal files, without the dot.
    pub extension: String,
    /// Directory names that are never descended into.
    pub exclude_dirs: Vec<String>,
    /// File names that are never processed.
    pub skip_files: Vec<String>,
    /// Glob patterns, relative to the scanned directory.
    pub ignore: Vec<String>,
    pub overwrite: bool,
    pub include_hidden: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: String::from("md"),
            exclude_dirs: vec![String::from("templates")],
            skip_files: vec![String::from("index.md"), String::from("README.md")],
            ignore: Vec::new(),
            overwrite: false,
            include_hidden: false,
        }
    }
}

/// Parses configuration from TOML text; missing keys take their defaults.
///
/// # Errors
///
/// Returns an error for invalid TOML, unknown keys, or an empty extension.
pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = toml::from_str(text).context("Invalid configuration")?;
    if config.extension.trim_start_matches('.').is_empty() {
        bail!("Invalid configuration: extension must not be empty");
    }
    Ok(config)
}

/// Loads the configuration for a run over `root`.
///
/// An explicit path must exist. Without one, `<root>/.pfm.toml` is used when
/// present and the defaults otherwise.
///
/// # Errors
///
/// This function may return an error if:
/// * The explicit configuration file does not exist or cannot be read
/// * The configuration file is not valid TOML or has unknown keys
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = root.join(CONFIG_FILE);
            if !default_path.is_file() {
                return Ok(Config::default());
            }
            default_path
        }
    };

    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&text).with_context(|| format!("In config file: {}", path.display()))
}
