//! # Booky
//!
//! A personal book-collection manager with:
//! - An ordered, in-memory collection addressed by 1-based position
//! - A single JSON file rewritten atomically after every change
//! - Tolerant startup: a missing or corrupt file gives an empty library
//! - Conjunctive search by keyword, year and identifier
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Front End (CLI, any UI)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Library                                 │
//! │        (add / delete / list / search, auto-save)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Query    │          │   Storage   │
//!   │  (filter)   │          │ (JSON file) │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          └──────────┬─────────────┘
//!                     ▼
//!              ┌─────────────┐
//!              │   Record    │
//!              │ (Book, map) │
//!              └─────────────┘
//! ```
//!
//! Single process, single writer: nothing here locks the library file.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod storage;
pub mod query;
pub mod library;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BookyError, Result};
pub use config::Config;
pub use library::{AutoSave, Library};
pub use query::SearchQuery;
pub use record::Book;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Booky
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
