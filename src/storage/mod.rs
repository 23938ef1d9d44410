//! Storage Module
//!
//! Persistence layer: the whole collection lives in one JSON document.
//!
//! ## Responsibilities
//! - Load the collection at startup, degrading to empty on a missing or
//!   corrupt file
//! - Rewrite the full file on every save
//! - Never leave a half-written library file behind
//!
//! ## File Format
//! ```text
//! [
//!   { "title": "...", "author": "...", "year": "...", "identifier": "..." },
//!   ...                      (array order == insertion order)
//! ]
//! ```
//!
//! ## Save Protocol
//! ```text
//! library.json.tmp  ← write full document (+ fsync)
//! library.json.tmp  → rename → library.json
//! ```

mod file;

pub use file::LibraryFile;
