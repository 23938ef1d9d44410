//! Record Module
//!
//! One catalog entry and its conversion to and from the persisted map form.
//!
//! ## Responsibilities
//! - Validate user input at construction (`Book::from_fields`)
//! - Keep every field textual; years such as "c. 1980" are stored verbatim
//! - Convert to/from a flat JSON object for the library file
//!
//! ## Persisted Shape
//! ```text
//! { "title": "Dune", "author": "Frank Herbert", "year": "1965", "identifier": "0441013597" }
//! ```

mod book;
mod serializer;

pub use book::Book;
pub use serializer::{from_map, to_map, RecordMap};

/// Keys of the persisted object, in write order
pub const TITLE_KEY: &str = "title";
pub const AUTHOR_KEY: &str = "author";
pub const YEAR_KEY: &str = "year";
pub const IDENTIFIER_KEY: &str = "identifier";

/// Key older library files used for the identifier
///
/// Mirrors the `#[serde(alias = "isbn")]` on `Book::identifier`; keep both in step.
pub const LEGACY_IDENTIFIER_KEY: &str = "isbn";
