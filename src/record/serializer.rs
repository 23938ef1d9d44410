//! Record serializer
//!
//! Converts books to and from the flat JSON objects stored in the library file.

use serde_json::{Map, Value};

use super::{Book, AUTHOR_KEY, IDENTIFIER_KEY, TITLE_KEY, YEAR_KEY};
use crate::error::{BookyError, Result};

/// Plain structured form of a book
pub type RecordMap = Map<String, Value>;

/// Convert a book to its persisted map (always all four keys)
pub fn to_map(book: &Book) -> RecordMap {
    let mut map = Map::with_capacity(4);
    map.insert(TITLE_KEY.to_string(), Value::String(book.title.clone()));
    map.insert(AUTHOR_KEY.to_string(), Value::String(book.author.clone()));
    map.insert(YEAR_KEY.to_string(), Value::String(book.year.clone()));
    map.insert(
        IDENTIFIER_KEY.to_string(),
        Value::String(book.identifier.clone()),
    );
    map
}

/// Rebuild a book from a persisted map
///
/// `title` is required. Missing optional keys default to empty strings, the
/// legacy `isbn` key is read as the identifier, and non-string values are
/// rejected rather than coerced. Unknown keys are ignored.
pub fn from_map(map: RecordMap) -> Result<Book> {
    serde_json::from_value(Value::Object(map))
        .map_err(|e| BookyError::Deserialization(format!("invalid book record: {}", e)))
}
