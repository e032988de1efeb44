// tests/integration_tests/extraction_test.rs
use super::common::WAVE_OPS;
use pfm::{FieldMatchers, extract, extract_metadata, extract_title};

#[test]
fn test_extract_proposal_header() {
    let extracted = extract(WAVE_OPS, FieldMatchers::standard());

    assert_eq!(extracted.title.as_deref(), Some("Wave Operation Intrinsics"));
    assert_eq!(extracted.fields.get("proposal"), Some("0007"));
    assert_eq!(extracted.fields.get("author"), Some("Jane Doe, John Smith"));
    assert_eq!(extracted.fields.get("sponsor"), Some("Chris B"));
    assert_eq!(extracted.fields.get("status"), Some("Under Consideration"));
    assert!(!extracted.fields.contains_key("planned_version"));
}

#[test]
fn test_link_stripping() {
    let record = extract_metadata(
        "* Author(s): [Jane Doe](https://example.com)\n",
        FieldMatchers::standard(),
    );
    assert_eq!(record.get("author"), Some("Jane Doe"));
}

#[test]
fn test_sponsor_continuation_until_blank_line() {
    let content = "* Sponsor: Alice\n    Bob\n\n    Carol\n";
    let record = extract_metadata(content, FieldMatchers::standard());
    assert_eq!(record.get("sponsor"), Some("Alice Bob"));
}

#[test]
fn test_bold_status_stripped_but_not_elsewhere() {
    let content = "* Status: **Accepted**\n* Planned Version: **6.9**\n";
    let record = extract_metadata(content, FieldMatchers::standard());
    assert_eq!(record.get("status"), Some("Accepted"));
    assert_eq!(record.get("planned_version"), Some("**6.9**"));
}

#[test]
fn test_title_may_appear_after_metadata() {
    let content = "* Status: Draft\n\nSome text\n# Late Title\n";
    assert_eq!(extract_title(content).as_deref(), Some("Late Title"));
}

#[test]
fn test_empty_values_are_omitted() {
    let record = extract_metadata("* Proposal: [ ]\n* Status: **Draft**\n", FieldMatchers::standard());
    assert!(!record.contains_key("proposal"));
    assert_eq!(record.len(), 1);
}
