//! Book record
//!
//! Immutable once built; the library only appends and removes whole books.

use std::fmt;

use serde::Deserialize;

use crate::error::{BookyError, Result};

/// A single entry in the collection
///
/// Duplicates are allowed: two books may share every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Book {
    pub(super) title: String,

    #[serde(default)]
    pub(super) author: String,

    #[serde(default)]
    pub(super) year: String,

    /// Catalog/ISBN-like code, no format checks
    #[serde(default, alias = "isbn")]
    pub(super) identifier: String,
}

impl Book {
    /// Build a book from raw user input
    ///
    /// Every field is trimmed. Fails with `Validation` when the title is
    /// empty afterwards; absent optional fields become empty strings.
    pub fn from_fields(
        title: &str,
        author: Option<&str>,
        year: Option<&str>,
        identifier: Option<&str>,
    ) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BookyError::Validation { field: "title" });
        }

        let field = |value: Option<&str>| value.map(str::trim).unwrap_or_default().to_string();

        Ok(Self {
            title: title.to_string(),
            author: field(author),
            year: field(year),
            identifier: field(identifier),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Free-form year text, never parsed
    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.title, self.author, self.year, self.identifier
        )
    }
}
