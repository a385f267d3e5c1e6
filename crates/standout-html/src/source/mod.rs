//! Content sources: where template text comes from.
//!
//! The renderer never reads files itself. It asks a [`ContentSource`] for the
//! text behind a logical name (`"home"`, `"partials/card"`, `"layout"`) and
//! treats any error as fatal for that render.
//!
//! | Source | Backing | Typical use |
//! |--------|---------|-------------|
//! | [`FsSource`] | files under a root directory | development, servers with a views dir |
//! | [`EmbeddedSource`] | entries baked in by `embed_views!` | single-binary deployment |
//! | [`MemorySource`] | an in-process map | inline templates, tests |
//!
//! Sources do no caching of their own; caching is the renderer's job.
//!
//! Closures and `Arc`-shared sources can be used directly:
//!
//! ```rust
//! use standout_html::{Config, LoadError, Renderer};
//!
//! let renderer = Renderer::new(Config::new(|name: &str| match name {
//!     "layout" => Ok("<main>{% include page %}</main>".to_string()),
//!     "home" => Ok("hi".to_string()),
//!     other => Err(LoadError::not_found(other)),
//! }));
//! assert_eq!(renderer.render_page("home", &()).unwrap(), "<main>hi</main>");
//! ```

mod embedded;
mod fs;
mod memory;

use std::sync::Arc;

use crate::error::LoadError;

pub use embedded::EmbeddedSource;
pub use fs::FsSource;
pub use memory::MemorySource;

/// Resolves a logical template name to raw template text.
pub trait ContentSource: Send + Sync {
    /// Loads the template stored under `name`.
    fn load_content(&self, name: &str) -> Result<String, LoadError>;
}

impl<F> ContentSource for F
where
    F: Fn(&str) -> Result<String, LoadError> + Send + Sync,
{
    fn load_content(&self, name: &str) -> Result<String, LoadError> {
        self(name)
    }
}

impl<T: ContentSource + ?Sized> ContentSource for Arc<T> {
    fn load_content(&self, name: &str) -> Result<String, LoadError> {
        (**self).load_content(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Renderer};

    #[test]
    fn test_shared_source_renders() {
        let views = Arc::new(
            MemorySource::new()
                .with("layout", "<main>{% include page %}</main>")
                .with("home", "hi"),
        );
        let renderer = Renderer::new(Config::new(Arc::clone(&views)));
        assert_eq!(renderer.render_page("home", &()).unwrap(), "<main>hi</main>");
        assert_eq!(views.len(), 2);
    }

    #[test]
    fn test_shared_trait_object_delegates() {
        let shared: Arc<dyn ContentSource> = Arc::new(MemorySource::new().with("home", "hi"));
        assert_eq!(shared.load_content("home").unwrap(), "hi");
        assert!(matches!(
            shared.load_content("nope"),
            Err(LoadError::NotFound { ref name }) if name == "nope"
        ));
    }
}
