use std::io;
use std::path::PathBuf;

use super::ContentSource;
use crate::config::{DEFAULT_EXTENSION, DEFAULT_VIEWS_ROOT};
use crate::error::LoadError;

/// Loads templates from files under a root directory.
///
/// The logical name `"partials/card"` with root `views` and extension `.html`
/// resolves to `views/partials/card.html`. Files are read on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsSource {
    root: PathBuf,
    extension: String,
}

impl FsSource {
    /// Creates a source reading `<root>/<name><extension>`.
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// Root directory templates are read from.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Extension appended to every logical name.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Physical path for a logical name.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}{}", name, self.extension))
    }
}

impl Default for FsSource {
    /// `views/<name>.html`
    fn default() -> Self {
        Self::new(DEFAULT_VIEWS_ROOT, DEFAULT_EXTENSION)
    }
}

impl ContentSource for FsSource {
    fn load_content(&self, name: &str) -> Result<String, LoadError> {
        let path = self.path_for(name);
        tracing::trace!(template = name, path = %path.display(), "reading template file");

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(LoadError::not_found(name)),
            Err(source) => Err(LoadError::Io { path, source }),
        }
    }
}
