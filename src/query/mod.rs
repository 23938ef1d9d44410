//! Query Module
//!
//! Read-only conjunctive filtering over a collection of books.
//!
//! ## Matching Rules
//! - `keyword`: case-insensitive substring of the title OR the author
//! - `year`: exact string equality, no numeric or range comparison
//! - `identifier`: exact string equality
//!
//! Absent or empty predicates place no constraint. Supplied predicates are
//! ANDed, and results keep collection order.

mod filter;

pub use filter::search;

/// Optional predicates for a search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: Option<String>,
    pub year: Option<String>,
    pub identifier: Option<String>,
}

impl SearchQuery {
    /// A query with no predicates (matches every book)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from optional raw inputs, as front ends collect them
    pub fn from_parts(keyword: Option<&str>, year: Option<&str>, identifier: Option<&str>) -> Self {
        Self {
            keyword: keyword.map(str::to_string),
            year: year.map(str::to_string),
            identifier: identifier.map(str::to_string),
        }
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// True when no predicate constrains the result
    pub fn is_unconstrained(&self) -> bool {
        [&self.keyword, &self.year, &self.identifier]
            .iter()
            .all(|p| p.as_deref().map_or(true, str::is_empty))
    }
}
