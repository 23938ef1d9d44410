//! Tests for the search filter
//!
//! These tests verify:
//! - Keyword matching on title or author, case-insensitively
//! - Exact year and identifier matching
//! - Conjunction of predicates and order preservation
//! - Unconstrained queries return everything

use booky::query::{search, SearchQuery};
use booky::Book;

// =============================================================================
// Helper Functions
// =============================================================================

fn catalog() -> Vec<Book> {
    let entries = [
        ("Dune", "Frank Herbert", "1965", "0441013597"),
        ("Foundation", "Isaac Asimov", "1951", ""),
        ("The Hobbit", "J.R.R. Tolkien", "1937", "0547928227"),
        ("Dune Messiah", "Frank Herbert", "1969", "0593098234"),
        ("I, Robot", "Isaac Asimov", "1950", ""),
        ("The Fellowship of the Ring", "J.R.R. Tolkien", "1954", ""),
        ("Foundation and Empire", "Isaac Asimov", "1952", ""),
        ("Sketchbook", "", "c. 1980", "MS-17"),
    ];

    entries
        .iter()
        .map(|&(t, a, y, i)| Book::from_fields(t, Some(a), Some(y), Some(i)).unwrap())
        .collect()
}

fn titles(hits: &[&Book]) -> Vec<String> {
    hits.iter().map(|b| b.title().to_string()).collect()
}

/// Books present in every one of `sets`, in catalog order
fn intersect<'a>(books: &'a [Book], sets: &[Vec<&'a Book>]) -> Vec<&'a Book> {
    books
        .iter()
        .filter(|book| {
            sets.iter()
                .all(|set| set.iter().any(|hit| std::ptr::eq(*hit, *book)))
        })
        .collect()
}

// =============================================================================
// Keyword Tests
// =============================================================================

#[test]
fn test_keyword_case_insensitive_author() {
    let books = catalog();
    let hits = search(&books, &SearchQuery::new().keyword("TOLKIEN"));

    assert_eq!(
        titles(&hits),
        vec!["The Hobbit", "The Fellowship of the Ring"]
    );
}

#[test]
fn test_keyword_matches_title_substring() {
    let books = catalog();
    let hits = search(&books, &SearchQuery::new().keyword("dune"));

    assert_eq!(titles(&hits), vec!["Dune", "Dune Messiah"]);
}

#[test]
fn test_keyword_in_title_and_author_counts_once() {
    let books = catalog();
    // "o" appears in both title and author of several books
    let hits = search(&books, &SearchQuery::new().keyword("o"));

    let mut seen = std::collections::HashSet::new();
    for hit in &hits {
        assert!(seen.insert(*hit as *const Book), "duplicate hit {}", hit.title());
    }
}

#[test]
fn test_keyword_no_match() {
    let books = catalog();
    assert!(search(&books, &SearchQuery::new().keyword("zzz")).is_empty());
}

// =============================================================================
// Exact Match Tests
// =============================================================================

#[test]
fn test_year_exact_text() {
    let books = catalog();

    let hits = search(&books, &SearchQuery::new().year("c. 1980"));
    assert_eq!(titles(&hits), vec!["Sketchbook"]);

    assert!(search(&books, &SearchQuery::new().year("1980")).is_empty());
    assert!(search(&books, &SearchQuery::new().year("195")).is_empty());
}

#[test]
fn test_identifier_exact() {
    let books = catalog();

    let hits = search(&books, &SearchQuery::new().identifier("0441013597"));
    assert_eq!(titles(&hits), vec!["Dune"]);

    // Case and substrings do not match
    assert!(search(&books, &SearchQuery::new().identifier("ms-17")).is_empty());
    assert!(search(&books, &SearchQuery::new().identifier("044101")).is_empty());
}

// =============================================================================
// Conjunction Tests
// =============================================================================

#[test]
fn test_predicates_are_anded() {
    let books = catalog();
    let query = SearchQuery::new().keyword("asimov").year("1951");

    assert_eq!(titles(&search(&books, &query)), vec!["Foundation"]);
}

#[test]
fn test_conjunction_equals_intersection() {
    let books = catalog();
    let queries = [
        ("herbert", "1965", "0441013597"),
        ("asimov", "1950", ""),
        ("the", "1937", "0547928227"),
        ("dune", "1951", ""),
    ];

    for (keyword, year, identifier) in queries {
        let combined = search(
            &books,
            &SearchQuery::from_parts(Some(keyword), Some(year), Some(identifier)),
        );
        let separate = vec![
            search(&books, &SearchQuery::from_parts(Some(keyword), None, None)),
            search(&books, &SearchQuery::from_parts(None, Some(year), None)),
            search(&books, &SearchQuery::from_parts(None, None, Some(identifier))),
        ];

        assert_eq!(
            titles(&combined),
            titles(&intersect(&books, &separate)),
            "query ({:?}, {:?}, {:?})",
            keyword,
            year,
            identifier
        );
    }
}

#[test]
fn test_results_keep_collection_order() {
    let books = catalog();
    let hits = search(&books, &SearchQuery::new().keyword("isaac"));

    assert_eq!(
        titles(&hits),
        vec!["Foundation", "I, Robot", "Foundation and Empire"]
    );
}

// =============================================================================
// Unconstrained Tests
// =============================================================================

#[test]
fn test_no_predicates_returns_all() {
    let books = catalog();
    let query = SearchQuery::new();

    assert!(query.is_unconstrained());
    assert_eq!(search(&books, &query).len(), books.len());
}

#[test]
fn test_empty_collection() {
    let hits = search(&[], &SearchQuery::new().keyword("dune"));
    assert!(hits.is_empty());
}
