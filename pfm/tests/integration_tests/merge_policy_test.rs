// tests/integration_tests/merge_policy_test.rs
use super::common::{DRAFT_STATUS, create_test_file, read};
use anyhow::Result;
use pfm::{FieldMatchers, FileOutcome, MergeMode, process_file};
use tempfile::TempDir;

const DRAFT_WITH_TITLE: &str = "\
---
title: \"Draft Feature\"
status: \"Draft\"
---
# Draft Feature

* Status: Accepted
";

fn process(dir: &TempDir, name: &str, mode: MergeMode) -> FileOutcome {
    process_file(&dir.path().join(name), mode, false, FieldMatchers::standard())
}

#[test]
fn test_preserve_mode_keeps_existing_status() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "0001.md", DRAFT_WITH_TITLE)?;

    assert_eq!(process(&dir, "0001.md", MergeMode::Preserve), FileOutcome::Unchanged);
    assert_eq!(read(dir.path(), "0001.md")?, DRAFT_WITH_TITLE);
    Ok(())
}

#[test]
fn test_overwrite_mode_replaces_status() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "0001.md", DRAFT_WITH_TITLE)?;

    assert_eq!(process(&dir, "0001.md", MergeMode::Overwrite), FileOutcome::Updated);
    assert_eq!(
        read(dir.path(), "0001.md")?,
        DRAFT_WITH_TITLE.replace("status: \"Draft\"", "status: \"Accepted\"")
    );
    Ok(())
}

#[test]
fn test_preserve_mode_adds_missing_keys_after_existing() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "0008.md", DRAFT_STATUS)?;

    assert_eq!(process(&dir, "0008.md", MergeMode::Preserve), FileOutcome::Updated);
    assert_eq!(
        read(dir.path(), "0008.md")?,
        "---\nlayout: \"proposal\"\nstatus: \"Draft\"\ntitle: \"Draft Feature\"\n---\n# Draft Feature\n\n* Status: Accepted\n"
    );
    Ok(())
}

#[test]
fn test_overwrite_keeps_keys_only_in_front_matter() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(
        dir.path(),
        "0002.md",
        "---\npermalink: /p/0002\nsponsor: \"Old\"\n---\n* Sponsor: New\n",
    )?;

    assert_eq!(process(&dir, "0002.md", MergeMode::Overwrite), FileOutcome::Updated);
    assert_eq!(
        read(dir.path(), "0002.md")?,
        "---\npermalink: \"/p/0002\"\nsponsor: \"New\"\n---\n* Sponsor: New\n"
    );
    Ok(())
}

#[test]
fn test_no_metadata_is_left_byte_for_byte() -> Result<()> {
    let dir = TempDir::new()?;
    let content = "Notes only.\r\n\r\n## Section\r\n* Status: hidden below a section\r\n";
    create_test_file(dir.path(), "0003.md", content)?;

    for mode in [MergeMode::Preserve, MergeMode::Overwrite] {
        assert_eq!(process(&dir, "0003.md", mode), FileOutcome::Unchanged);
    }
    assert_eq!(read(dir.path(), "0003.md")?, content);
    Ok(())
}
