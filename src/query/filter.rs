//! Search filter

use super::SearchQuery;
use crate::record::Book;

/// Filter `books` by every predicate in `query`
///
/// Each book is visited once, so a result never contains duplicates and
/// preserves the input order.
pub fn search<'a>(books: &'a [Book], query: &SearchQuery) -> Vec<&'a Book> {
    let matcher = Matcher::new(query);
    books.iter().filter(|book| matcher.matches(book)).collect()
}

/// Query with empty predicates dropped and the keyword lowered once
struct Matcher<'q> {
    keyword: Option<String>,
    year: Option<&'q str>,
    identifier: Option<&'q str>,
}

impl<'q> Matcher<'q> {
    fn new(query: &'q SearchQuery) -> Self {
        let present = |p: &'q Option<String>| p.as_deref().filter(|s| !s.is_empty());

        Self {
            keyword: present(&query.keyword).map(str::to_lowercase),
            year: present(&query.year),
            identifier: present(&query.identifier),
        }
    }

    fn matches(&self, book: &Book) -> bool {
        if let Some(keyword) = &self.keyword {
            let in_title = book.title().to_lowercase().contains(keyword.as_str());
            if !in_title && !book.author().to_lowercase().contains(keyword.as_str()) {
                return false;
            }
        }

        if let Some(year) = self.year {
            if book.year() != year {
                return false;
            }
        }

        if let Some(identifier) = self.identifier {
            if book.identifier() != identifier {
                return false;
            }
        }

        true
    }
}
