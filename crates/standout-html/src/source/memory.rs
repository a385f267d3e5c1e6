use std::collections::HashMap;

use super::ContentSource;
use crate::error::LoadError;

/// In-memory content source keyed by logical name.
///
/// ```rust
/// use standout_html::{Config, MemorySource, Renderer};
///
/// let views = MemorySource::new()
///     .with("layout", "[{% include page %}]")
///     .with("home", "{{ greeting }}");
/// let renderer = Renderer::new(Config::new(views));
///
/// let html = renderer
///     .render_page("home", &serde_json::json!({ "greeting": "hello" }))
///     .unwrap();
/// assert_eq!(html, "[hello]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    templates: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a template, builder style.
    pub fn with(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(name, content);
        self
    }

    /// Adds or replaces a template.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.templates.insert(name.into(), content.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<N, C> FromIterator<(N, C)> for MemorySource
where
    N: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        let mut source = Self::new();
        for (name, content) in iter {
            source.insert(name, content);
        }
        source
    }
}

impl ContentSource for MemorySource {
    fn load_content(&self, name: &str) -> Result<String, LoadError> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| LoadError::not_found(name))
    }
}
