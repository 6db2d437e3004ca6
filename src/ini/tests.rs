//! Tests for INI parsing, validation, and serialization.

use super::*;
use crate::error::FormatError;
use std::path::Path;

fn parse_ok(content: &str) -> IniDocument {
    parse(content, Path::new("test.ini")).unwrap()
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn validate_accepts_minimal_file() {
    assert!(validate("[db]\nhost=localhost\n", Path::new("t.ini")).is_ok());
}

#[test]
fn validate_rejects_file_without_section_header() {
    let result = validate("host=localhost\nport=5432\n", Path::new("t.ini"));
    match result {
        Err(FormatError::FormatInvalid { reason, .. }) => {
            assert!(reason.contains("no [section] header"));
        }
        other => panic!("expected FormatInvalid, got {:?}", other),
    }
}

#[test]
fn validate_rejects_file_without_key_value_line() {
    let result = validate("[db]\n# just a comment\n", Path::new("t.ini"));
    assert!(matches!(
        result,
        Err(FormatError::FormatInvalid { .. })
    ));
}

#[test]
fn validate_ignores_commented_out_key_values() {
    // A key=value hidden behind a comment marker does not satisfy the check
    let result = validate("[db]\n# host=localhost\n; port=5432\n", Path::new("t.ini"));
    assert!(result.is_err());
}

#[test]
fn validate_rejects_empty_file() {
    assert!(validate("", Path::new("t.ini")).is_err());
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn parse_basic_sections_and_keys() {
    let doc = parse_ok("[db]\nhost=localhost\nport=5432\n\n[app]\nname=demo\n");

    assert_eq!(doc.get("db", "host"), Some("localhost"));
    assert_eq!(doc.get("db", "port"), Some("5432"));
    assert_eq!(doc.get("app", "name"), Some("demo"));
    assert_eq!(doc.section_names(), vec!["app", "db"]);
}

#[test]
fn parse_skips_comments_and_blank_lines() {
    let doc = parse_ok("# leading comment\n\n[db]\n; inline note\nhost=localhost\n\n");

    assert_eq!(doc.get("db", "host"), Some("localhost"));
    assert_eq!(doc.section_names(), vec!["db"]);
}

#[test]
fn parse_trims_whitespace_around_keys_and_values() {
    let doc = parse_ok("[db]\n  host =  localhost  \n");
    assert_eq!(doc.get("db", "host"), Some("localhost"));
}

#[test]
fn parse_trims_whitespace_inside_section_brackets() {
    let doc = parse_ok("[ db ]\nhost=localhost\n");
    assert_eq!(doc.get("db", "host"), Some("localhost"));
}

#[test]
fn parse_keeps_equals_signs_in_values() {
    let doc = parse_ok("[app]\nquery=a=b=c\n");
    assert_eq!(doc.get("app", "query"), Some("a=b=c"));
}

#[test]
fn parse_unquotes_quoted_values() {
    let doc = parse_ok("[app]\nflags=\"a;b\"\nnote=\"say \"\"hi\"\"\"\n");
    assert_eq!(doc.get("app", "flags"), Some("a;b"));
    assert_eq!(doc.get("app", "note"), Some("say \"hi\""));
}

#[test]
fn parse_keeps_empty_value() {
    let doc = parse_ok("[app]\nempty=\n");
    assert_eq!(doc.get("app", "empty"), Some(""));
}

#[test]
fn parse_header_with_no_keys_yields_empty_section() {
    let doc = parse_ok("[empty]\n[db]\nhost=localhost\n");
    assert!(doc.section("empty").unwrap().is_empty());
}

#[test]
fn parse_rejects_key_value_before_any_section() {
    let result = parse("host=localhost\n[db]\nport=5432\n", Path::new("t.ini"));
    match result {
        Err(FormatError::FormatInvalid { reason, .. }) => {
            assert!(reason.contains("line 1"));
            assert!(reason.contains("before any [section] header"));
        }
        other => panic!("expected FormatInvalid, got {:?}", other),
    }
}

#[test]
fn parse_rejects_stray_line() {
    let result = parse("[db]\nhost=localhost\njust some text\n", Path::new("t.ini"));
    match result {
        Err(FormatError::FormatInvalid { reason, .. }) => {
            assert!(reason.contains("line 3"));
        }
        other => panic!("expected FormatInvalid, got {:?}", other),
    }
}

#[test]
fn parse_rejects_empty_key() {
    let result = parse("[db]\n=value\n", Path::new("t.ini"));
    assert!(matches!(
        result,
        Err(FormatError::FormatInvalid { .. })
    ));
}

#[test]
fn parse_last_duplicate_key_wins() {
    let doc = parse_ok("[db]\nhost=first\nhost=second\n");
    assert_eq!(doc.get("db", "host"), Some("second"));
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn serialize_emits_headers_and_key_lines() {
    let mut doc = IniDocument::new();
    doc.set("db", "host", "localhost");
    doc.set("db", "port", "5432");
    doc.set("app", "name", "demo");

    let text = serialize(&doc);
    assert_eq!(text, "[app]\nname=demo\n\n[db]\nhost=localhost\nport=5432\n");
}

#[test]
fn serialize_quotes_values_with_comment_markers() {
    let mut doc = IniDocument::new();
    doc.set("app", "flags", "a;b");
    doc.set("app", "tag", "x#y");

    let text = serialize(&doc);
    assert!(text.contains("flags=\"a;b\"\n"));
    assert!(text.contains("tag=\"x#y\"\n"));
}

#[test]
fn serialize_doubles_internal_quotes() {
    let mut doc = IniDocument::new();
    doc.set("app", "note", "say \"hi\"");

    let text = serialize(&doc);
    assert!(text.contains("note=\"say \"\"hi\"\"\"\n"));
}

#[test]
fn serialize_parse_round_trip() {
    let mut doc = IniDocument::new();
    doc.set("db", "host", "localhost");
    doc.set("app", "flags", "a;b");
    doc.set("app", "note", "say \"hi\"");

    let reparsed = parse(&serialize(&doc), Path::new("t.ini")).unwrap();
    assert_eq!(reparsed, doc);
}

#[test]
fn serialize_empty_document_is_empty() {
    assert_eq!(serialize(&IniDocument::new()), "");
}

// ============================================================================
// Document mutation
// ============================================================================

#[test]
fn set_overwrites_existing_value() {
    let mut doc = IniDocument::new();
    doc.set("db", "host", "first");
    doc.set("db", "host", "second");
    assert_eq!(doc.get("db", "host"), Some("second"));
}

#[test]
fn remove_reports_whether_key_existed() {
    let mut doc = IniDocument::new();
    doc.set("db", "host", "localhost");

    assert!(doc.remove("db", "host"));
    assert!(!doc.remove("db", "host"));
    assert!(!doc.remove("nope", "host"));
}

#[test]
fn remove_last_key_drops_section() {
    let mut doc = IniDocument::new();
    doc.set("db", "host", "localhost");
    doc.set("db", "port", "5432");
    doc.set("app", "name", "demo");

    doc.remove("app", "name");
    assert_eq!(doc.section_names(), vec!["db"]);

    doc.remove("db", "host");
    assert_eq!(doc.section_names(), vec!["db"]);
}
