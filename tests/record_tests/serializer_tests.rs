//! Tests for Book construction and the record serializer
//!
//! These tests verify:
//! - Boundary validation in `Book::from_fields`
//! - `to_map` shape and `from_map` defaults
//! - Legacy `isbn` key handling
//! - Rejection of malformed records

use booky::record::{self, Book, RecordMap, IDENTIFIER_KEY, LEGACY_IDENTIFIER_KEY};
use booky::BookyError;
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn object(value: Value) -> RecordMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

fn dune() -> Book {
    Book::from_fields("Dune", Some("Frank Herbert"), Some("1965"), Some("0441013597")).unwrap()
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_from_fields_all_fields() {
    let book = dune();

    assert_eq!(book.title(), "Dune");
    assert_eq!(book.author(), "Frank Herbert");
    assert_eq!(book.year(), "1965");
    assert_eq!(book.identifier(), "0441013597");
}

#[test]
fn test_from_fields_empty_title() {
    let err = Book::from_fields("", None, None, None).unwrap_err();
    assert!(matches!(err, BookyError::Validation { field: "title" }));
}

#[test]
fn test_from_fields_whitespace_title() {
    let err = Book::from_fields(" \t\n", Some("Someone"), Some("2001"), None).unwrap_err();
    assert!(matches!(err, BookyError::Validation { .. }));
}

#[test]
fn test_duplicate_books_are_equal() {
    assert_eq!(dune(), dune());
}

// =============================================================================
// Serializer Tests
// =============================================================================

#[test]
fn test_to_map_keys_and_values() {
    let map = record::to_map(&dune());

    assert_eq!(map.len(), 4);
    assert_eq!(map["title"], json!("Dune"));
    assert_eq!(map["author"], json!("Frank Herbert"));
    assert_eq!(map["year"], json!("1965"));
    assert_eq!(map[IDENTIFIER_KEY], json!("0441013597"));
}

#[test]
fn test_from_map_restores_book() {
    let book = record::from_map(record::to_map(&dune())).unwrap();
    assert_eq!(book, dune());
}

#[test]
fn test_from_map_defaults_missing_optional_keys() {
    let book = record::from_map(object(json!({ "title": "Untitled Draft" }))).unwrap();

    assert_eq!(book.title(), "Untitled Draft");
    assert_eq!(book.author(), "");
    assert_eq!(book.year(), "");
    assert_eq!(book.identifier(), "");
}

#[test]
fn test_from_map_missing_title() {
    let err = record::from_map(object(json!({
        "author": "Frank Herbert",
        "year": "1965"
    })))
    .unwrap_err();

    assert!(matches!(err, BookyError::Deserialization(_)));
}

#[test]
fn test_from_map_does_not_revalidate_title() {
    // Blank titles are only rejected at the input boundary
    let book = record::from_map(object(json!({ "title": "" }))).unwrap();
    assert_eq!(book.title(), "");
}

#[test]
fn test_from_map_accepts_legacy_isbn_key() {
    let mut map = object(json!({
        "title": "Foundation",
        "author": "Isaac Asimov",
        "year": "1951"
    }));
    map.insert(LEGACY_IDENTIFIER_KEY.to_string(), json!("0553293354"));

    let book = record::from_map(map).unwrap();
    assert_eq!(book.identifier(), "0553293354");

    // Written back under the current key only
    let written = record::to_map(&book);
    assert!(written.contains_key(IDENTIFIER_KEY));
    assert!(!written.contains_key(LEGACY_IDENTIFIER_KEY));
}

#[test]
fn test_from_map_ignores_unknown_keys() {
    let book = record::from_map(object(json!({
        "title": "Dune",
        "shelf": "B3"
    })))
    .unwrap();

    assert_eq!(book.title(), "Dune");
}

#[test]
fn test_from_map_rejects_non_string_values() {
    let err = record::from_map(object(json!({ "title": "Dune", "author": null }))).unwrap_err();
    assert!(matches!(err, BookyError::Deserialization(_)));

    let err = record::from_map(object(json!({ "title": 42 }))).unwrap_err();
    assert!(matches!(err, BookyError::Deserialization(_)));
}
