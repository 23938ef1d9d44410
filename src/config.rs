//! Configuration for Booky
//!
//! Centralized configuration with sensible defaults. The backing file is
//! always passed in here; nothing in the core reads a global filename.

use std::path::PathBuf;

/// Default name of the library file, relative to the working directory
pub const DEFAULT_LIBRARY_FILE: &str = "library.json";

/// Main configuration for a Library instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// JSON file holding the whole collection
    pub library_path: PathBuf,

    /// fsync the temporary file before renaming it over the library file
    pub sync_on_save: bool,

    // -------------------------------------------------------------------------
    // Mutation Configuration
    // -------------------------------------------------------------------------
    /// Rewrite the library file after every add/delete
    pub auto_save: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_path: PathBuf::from(DEFAULT_LIBRARY_FILE),
            sync_on_save: true,
            auto_save: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the library file path
    pub fn library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.library_path = path.into();
        self
    }

    /// Enable or disable fsync before the atomic rename
    pub fn sync_on_save(mut self, sync: bool) -> Self {
        self.config.sync_on_save = sync;
        self
    }

    /// Enable or disable the save after each mutation
    pub fn auto_save(mut self, enabled: bool) -> Self {
        self.config.auto_save = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
