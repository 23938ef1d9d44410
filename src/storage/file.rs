//! Library file
//!
//! Reads and atomically rewrites the JSON document backing a library.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{BookyError, Result};
use crate::record::{self, Book};

/// Handle on the JSON file backing a library
#[derive(Debug, Clone)]
pub struct LibraryFile {
    /// Final location of the document
    path: PathBuf,

    /// fsync the temporary file before the rename
    sync: bool,
}

impl LibraryFile {
    const TMP_SUFFIX: &'static str = ".tmp";

    pub fn new(path: impl Into<PathBuf>, sync: bool) -> Self {
        Self {
            path: path.into(),
            sync,
        }
    }

    /// Load the collection, never failing
    ///
    /// A missing file yields an empty collection silently. Any other failure
    /// is logged and also yields an empty collection, so a corrupt file never
    /// produces a partially populated library.
    pub fn load(&self) -> Vec<Book> {
        self.load_reporting().0
    }

    /// Tolerant load that also reports whether the file was unusable
    ///
    /// The flag is `true` only when the file exists but could not be read or
    /// decoded; a missing or blank file is not a failure.
    pub fn load_reporting(&self) -> (Vec<Book>, bool) {
        match self.try_load() {
            Ok(books) => {
                tracing::info!(path = %self.path.display(), count = books.len(), "library loaded");
                (books, false)
            }
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to load library, starting empty"
                );
                (Vec::new(), true)
            }
        }
    }

    /// Load the collection, surfacing every failure
    ///
    /// Returns:
    /// - `Ok(vec![])` — file missing or blank
    /// - `Err(Persistence)` — file exists but cannot be read
    /// - `Err(Deserialization)` — not a JSON array, or a record is malformed
    pub fn try_load(&self) -> Result<Vec<Book>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no library file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(BookyError::persistence(&self.path, e)),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let values: Vec<Value> = serde_json::from_str(&contents).map_err(|e| {
            BookyError::Deserialization(format!(
                "{} is not a JSON array of books: {}",
                self.path.display(),
                e
            ))
        })?;

        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                Value::Object(map) => record::from_map(map).map_err(|e| {
                    BookyError::Deserialization(format!("entry {}: {}", index + 1, e))
                }),
                other => Err(BookyError::Deserialization(format!(
                    "entry {}: expected an object, found {}",
                    index + 1,
                    other
                ))),
            })
            .collect()
    }

    /// Rewrite the whole file with `books`, in order
    ///
    /// The document is written to a sibling temporary file and renamed over
    /// the target, so readers see either the old or the new collection.
    pub fn save(&self, books: &[Book]) -> Result<()> {
        let document = Value::Array(
            books
                .iter()
                .map(|book| Value::Object(record::to_map(book)))
                .collect(),
        );
        let bytes = serde_json::to_vec_pretty(&document)
            .map_err(|e| BookyError::persistence(&self.path, e.into()))?;

        let tmp_path = self.tmp_path()?;
        if let Err(e) = self.write_and_rename(&tmp_path, &bytes) {
            let _ = fs::remove_file(&tmp_path);
            return Err(BookyError::persistence(&self.path, e));
        }

        tracing::debug!(path = %self.path.display(), count = books.len(), "library saved");
        Ok(())
    }

    /// Get the library file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn write_and_rename(&self, tmp_path: &Path, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = File::create(tmp_path)?;
        file.write_all(bytes)?;
        file.write_all(b"\n")?;
        if self.sync {
            file.sync_all()?;
        }
        drop(file);

        fs::rename(tmp_path, &self.path)
    }

    /// "library.json" → "library.json.tmp"
    ///
    /// Paths without a file name (`..`, `/`) have no sibling to rename from.
    fn tmp_path(&self) -> Result<PathBuf> {
        let Some(file_name) = self.path.file_name() else {
            return Err(BookyError::persistence(
                &self.path,
                io::Error::new(io::ErrorKind::InvalidInput, "library path has no file name"),
            ));
        };

        let mut name = file_name.to_os_string();
        name.push(Self::TMP_SUFFIX);
        Ok(self.path.with_file_name(name))
    }
}
