//! Views baked into the binary with `embed_views!`.
//!
//! An [`EmbeddedSource`] holds both the embedded entries and the directory they
//! were read from. Release builds only ever use the entries. Debug builds read
//! from the directory when it still exists, so editing a view shows up on the
//! next (uncached) render without recompiling.

use std::path::{Path, PathBuf};

use super::{ContentSource, FsSource};
use crate::config::DEFAULT_EXTENSION;
use crate::error::LoadError;

/// Content source over `(name_with_extension, content)` pairs.
#[derive(Debug, Clone)]
pub struct EmbeddedSource {
    entries: &'static [(&'static str, &'static str)],
    source_dir: PathBuf,
    extension: String,
}

impl EmbeddedSource {
    /// Creates an embedded source. Usually called by `embed_views!`.
    #[doc(hidden)]
    pub fn new(entries: &'static [(&'static str, &'static str)], source_path: &str) -> Self {
        Self {
            entries,
            source_dir: PathBuf::from(source_path),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Uses `extension` instead of `.html` when mapping names to entries.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// The embedded entries, names including their extension.
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    /// Directory the entries were embedded from.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Returns true when content is read from disk instead of the entries.
    ///
    /// Only in debug builds, and only while the source directory exists.
    pub fn should_hot_reload(&self) -> bool {
        cfg!(debug_assertions) && self.source_dir.is_dir()
    }

    fn lookup(&self, name: &str) -> Option<&'static str> {
        let key = format!("{}{}", name, self.extension);
        self.entries
            .iter()
            .find(|(entry, _)| *entry == key)
            .map(|(_, content)| *content)
    }
}

impl ContentSource for EmbeddedSource {
    fn load_content(&self, name: &str) -> Result<String, LoadError> {
        if self.should_hot_reload() {
            let disk = FsSource::new(&self.source_dir, self.extension.clone());
            return disk.load_content(name);
        }

        self.lookup(name)
            .map(str::to_string)
            .ok_or_else(|| LoadError::not_found(name))
    }
}
