use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub const ACCEPTED: &str = "\
# Wave Size Range

* Proposal: [0013](0013-wave-size-range.md)
* Author(s): [Jane Doe](https://github.com/jdoe)
* Sponsor: [Chris B](https://github.com/chrisb)
* Status: **Accepted**
* Planned Version: Shader Model 6.8

## Introduction

Text.
";

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "0013-wave-size-range.md", ACCEPTED)?;
    create_test_file(&dir, "0002-notes.md", "Plain notes without metadata.\n")?;
    create_test_file(&dir, "nested/0020-nested.md", "# Nested\n* Status: Draft\n")?;
    create_test_file(&dir, "templates/basic.md", "# Template\n* Status: Template\n")?;
    create_test_file(&dir, "index.md", "# Index\n")?;
    create_test_file(&dir, "README.md", "# Readme\n")?;
    create_test_file(&dir, "notes.txt", "# Not markdown\n")?;
    create_test_file(&dir, ".hidden.md", "# Hidden\n")?;

    Ok(dir)
}
