//! Library Module
//!
//! The store: owns the ordered collection and coordinates persistence.
//!
//! ## Responsibilities
//! - Hydrate the collection from the library file on open
//! - Append/remove books and auto-save after each mutation
//! - Answer list/search queries without mutating anything
//! - Final save on explicit close

use std::path::Path;

use crate::config::Config;
use crate::error::{BookyError, Result};
use crate::query::{self, SearchQuery};
use crate::record::Book;
use crate::storage::LibraryFile;

/// Outcome of the save that follows a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoSave {
    /// Collection written to the library file
    Saved,

    /// `auto_save` is off in the config
    Disabled,

    /// Write failed; the mutation was kept anyway
    Failed { reason: String },
}

/// An open book collection
///
/// ## Lifecycle
/// `open` → any number of add/delete/list/search → `close` (final save).
/// Nothing is written on drop; owners call `close` or use `Library::scoped`.
///
/// ## Positions
/// Books are addressed by 1-based position in insertion order, matching how
/// front ends number them. Positions always refer to the full collection,
/// never to a filtered search result.
pub struct Library {
    /// Library configuration
    config: Config,

    /// Backing JSON file
    file: LibraryFile,

    /// Books in insertion order (the persisted order)
    books: Vec<Book>,

    /// Status of the most recent auto-save, if any mutation happened
    last_auto_save: Option<AutoSave>,

    /// Number of auto-saves that failed since open
    auto_save_failures: u64,

    /// The backing file existed but could not be loaded, and the collection
    /// has not changed since; `close` leaves such a file untouched
    load_failed: bool,
}

impl Library {
    /// Open a library, loading whatever the backing file holds
    ///
    /// A missing or corrupt file gives an empty library (corruption is logged).
    pub fn open(config: Config) -> Self {
        let file = LibraryFile::new(&config.library_path, config.sync_on_save);
        let (books, load_failed) = file.load_reporting();

        Self {
            config,
            file,
            books,
            last_auto_save: None,
            auto_save_failures: 0,
            load_failed,
        }
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified library file
    pub fn open_path(path: &Path) -> Self {
        let config = Config::builder().library_path(path).build();
        Self::open(config)
    }

    /// Run `f` against an open library, then close it
    ///
    /// The library is closed whether or not `f` succeeds, so the final save
    /// follows the same rules as `close`. If both `f` and the
    /// final save fail, `f`'s error is returned and the save error is logged.
    pub fn scoped<T, F>(config: Config, f: F) -> Result<T>
    where
        F: FnOnce(&mut Library) -> Result<T>,
    {
        let mut library = Self::open(config);
        let outcome = f(&mut library);
        let closed = library.close();

        match (outcome, closed) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(close_err)) => {
                tracing::warn!(error = %close_err, "final save failed after an earlier error");
                Err(e)
            }
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a book, then auto-save
    pub fn add(&mut self, book: Book) {
        tracing::debug!(title = book.title(), "adding book");
        self.books.push(book);
        self.load_failed = false;
        self.auto_save();
    }

    /// Validate raw fields, append the book, then auto-save
    ///
    /// Fails with `Validation` (nothing added) when the title is blank.
    pub fn add_book(
        &mut self,
        title: &str,
        author: Option<&str>,
        year: Option<&str>,
        identifier: Option<&str>,
    ) -> Result<()> {
        let book = Book::from_fields(title, author, year, identifier)?;
        self.add(book);
        Ok(())
    }

    /// Remove the book at a 1-based `position`, then auto-save
    ///
    /// Fails with `OutOfRange` when `position` is 0 or past the end; the
    /// collection is untouched and nothing is saved in that case.
    pub fn delete(&mut self, position: usize) -> Result<Book> {
        let index = self.index_of(position)?;
        let removed = self.books.remove(index);
        self.load_failed = false;

        tracing::debug!(position, title = removed.title(), "deleted book");
        self.auto_save();
        Ok(removed)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Snapshot of the whole collection, in order
    pub fn list(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Borrowed view of the whole collection, in order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Book at a 1-based position
    pub fn get(&self, position: usize) -> Option<&Book> {
        position.checked_sub(1).and_then(|i| self.books.get(i))
    }

    /// Books matching every predicate of `query`, in collection order
    pub fn search(&self, query: &SearchQuery) -> Vec<&Book> {
        query::search(&self.books, query)
    }

    /// `search` with raw optional inputs; empty strings are no constraint
    pub fn search_books(
        &self,
        keyword: Option<&str>,
        year: Option<&str>,
        identifier: Option<&str>,
    ) -> Vec<&Book> {
        self.search(&SearchQuery::from_parts(keyword, year, identifier))
    }

    pub fn size(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write the collection to the configured library file
    pub fn save(&mut self) -> Result<()> {
        self.file.save(&self.books)?;
        self.load_failed = false;
        tracing::info!(path = %self.file.path().display(), count = self.books.len(), "library saved");
        Ok(())
    }

    /// Write the collection to another file (the backing path is unchanged)
    pub fn save_to(&self, path: &Path) -> Result<()> {
        LibraryFile::new(path, self.config.sync_on_save).save(&self.books)?;
        tracing::info!(path = %path.display(), count = self.books.len(), "library saved");
        Ok(())
    }

    /// Replace the in-memory collection with the configured file's contents
    pub fn reload(&mut self) {
        let (books, load_failed) = self.file.load_reporting();
        self.books = books;
        self.load_failed = load_failed;
    }

    /// Replace the in-memory collection with another file's contents
    ///
    /// The backing path used by auto-save and `close` is unchanged, and the
    /// replaced collection counts as a change to it.
    pub fn load_from(&mut self, path: &Path) {
        self.books = LibraryFile::new(path, self.config.sync_on_save).load();
        self.load_failed = false;
    }

    /// Close the library gracefully
    ///
    /// Performs the final save and reports its failure. When the backing
    /// file could not be loaded and nothing changed since, the save is
    /// skipped so the unreadable file is not replaced by an empty one.
    pub fn close(mut self) -> Result<()> {
        if self.load_failed {
            tracing::warn!(
                path = %self.file.path().display(),
                "library file was not loadable and is unchanged, skipping final save"
            );
            return Ok(());
        }

        self.save()?;
        tracing::debug!(path = %self.file.path().display(), "library closed");
        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the library file path
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Status of the most recent auto-save (`None` before any mutation)
    pub fn last_auto_save(&self) -> Option<&AutoSave> {
        self.last_auto_save.as_ref()
    }

    /// Number of failed auto-saves since open
    pub fn auto_save_failures(&self) -> u64 {
        self.auto_save_failures
    }

    /// True while the collection still reflects a failed load of the backing file
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// 1-based position → 0-based index
    fn index_of(&self, position: usize) -> Result<usize> {
        if position == 0 || position > self.books.len() {
            return Err(BookyError::OutOfRange {
                position,
                size: self.books.len(),
            });
        }
        Ok(position - 1)
    }

    /// Save after a mutation; failures are logged and recorded, never returned
    fn auto_save(&mut self) {
        let status = if !self.config.auto_save {
            AutoSave::Disabled
        } else {
            match self.file.save(&self.books) {
                Ok(()) => AutoSave::Saved,
                Err(e) => {
                    self.auto_save_failures += 1;
                    tracing::warn!(
                        path = %self.file.path().display(),
                        error = %e,
                        failures = self.auto_save_failures,
                        "auto-save failed, change kept in memory"
                    );
                    AutoSave::Failed {
                        reason: e.to_string(),
                    }
                }
            }
        };

        self.last_auto_save = Some(status);
    }
}
