// tests/integration_tests/edge_cases_test.rs
use super::common::{create_test_file, read, setup_test_directory};
use anyhow::Result;
use pfm::{Config, RunOptions, update_directory};
use std::fs;

#[test]
fn test_unreadable_file_does_not_stop_batch() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    fs::write(temp_dir.path().join("0001-binary.md"), [0xc3, 0x28, 0xa0, 0xa1])?;

    let stats = update_directory(temp_dir.path(), &Config::default(), RunOptions::default())?;
    assert_eq!(stats.scanned, 5);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.updated, 3, "Files after the failure are still processed");
    Ok(())
}

#[test]
fn test_stray_front_matter_line_keeps_existing_keys() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    create_test_file(
        temp_dir.path(),
        "0001.md",
        "---\nlayout: proposal\n: no key\n---\n# Recovered\n* Status: Accepted\n",
    )?;

    let stats = update_directory(temp_dir.path(), &Config::default(), RunOptions::default())?;
    assert_eq!(stats.updated, 1);
    assert_eq!(
        read(temp_dir.path(), "0001.md")?,
        "---\nlayout: \"proposal\"\n: \"no key\"\ntitle: \"Recovered\"\nstatus: \"Accepted\"\n---\n# Recovered\n* Status: Accepted\n"
    );

    let again = update_directory(temp_dir.path(), &Config::default(), RunOptions::default())?;
    assert_eq!(again.updated, 0, "Second run leaves the file alone");
    Ok(())
}

#[test]
fn test_empty_block_gets_filled() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    create_test_file(temp_dir.path(), "0001.md", "---\n---\n# Heading Only\n")?;

    let stats = update_directory(temp_dir.path(), &Config::default(), RunOptions::default())?;
    assert_eq!(stats.updated, 1);
    assert_eq!(
        read(temp_dir.path(), "0001.md")?,
        "---\ntitle: \"Heading Only\"\n---\n# Heading Only\n"
    );
    Ok(())
}

#[test]
fn test_missing_directory_is_fatal() {
    let temp_dir = tempfile::TempDir::new().expect("temp dir");
    let missing = temp_dir.path().join("proposals");
    let result = update_directory(&missing, &Config::default(), RunOptions::default());
    assert!(result.is_err());
}

#[test]
fn test_invalid_ignore_pattern_is_fatal() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let config = Config {
        ignore: vec![String::from("[broken")],
        ..Config::default()
    };
    assert!(update_directory(temp_dir.path(), &config, RunOptions::default()).is_err());
    Ok(())
}
