//! Renderer configuration.
//!
//! A [`Config`] bundles the four things a [`Renderer`](crate::Renderer) needs:
//! a content source, the layout name, the user function registry and the
//! cache switch. It is fixed once the renderer is built.
//!
//! Three presets cover the common setups:
//!
//! | Preset | Source | Cache |
//! |--------|--------|-------|
//! | [`Config::new`] | supplied | on |
//! | [`Config::default`] | `views/<name>.html` | on |
//! | [`Config::debug`] | `views/<name>.html` | off (recompile every render) |
//!
//! Deployments that keep settings in a file can use [`Settings`]:
//!
//! ```rust
//! use standout_html::Settings;
//!
//! let settings = Settings::from_yaml(r#"
//! root: site/views
//! layout: base
//! disable_cache: true
//! "#).unwrap();
//! assert_eq!(settings.extension, ".html");
//! let config = settings.into_config();
//! assert_eq!(config.layout(), "base");
//! ```

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::RenderError;
use crate::functions::FunctionRegistry;
use crate::source::{ContentSource, FsSource};

/// Layout name used when none is configured.
pub const DEFAULT_LAYOUT: &str = "layout";

/// Directory [`FsSource::default`] reads from.
pub const DEFAULT_VIEWS_ROOT: &str = "views";

/// Extension appended to logical names by the bundled sources.
pub const DEFAULT_EXTENSION: &str = ".html";

/// Namespace `partial(name, data)` resolves names under.
pub const PARTIALS_NAMESPACE: &str = "partials";

/// Configuration for a [`Renderer`](crate::Renderer).
#[derive(Clone)]
pub struct Config {
    source: Arc<dyn ContentSource>,
    layout: String,
    functions: FunctionRegistry,
    disable_cache: bool,
}

impl Config {
    /// Creates a configuration around `source` with default settings.
    pub fn new(source: impl ContentSource + 'static) -> Self {
        Self::from_shared(Arc::new(source))
    }

    /// Creates a configuration around an already shared source.
    pub fn from_shared(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            layout: DEFAULT_LAYOUT.to_string(),
            functions: FunctionRegistry::new(),
            disable_cache: false,
        }
    }

    /// Default configuration with caching disabled.
    ///
    /// Every render reloads and recompiles the layout and template, so edits
    /// on disk show up immediately.
    pub fn debug() -> Self {
        Self::default().with_cache_disabled(true)
    }

    /// Sets the logical name of the layout every template is combined with.
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Replaces the function registry.
    pub fn with_functions(mut self, functions: FunctionRegistry) -> Self {
        self.functions = functions;
        self
    }

    /// Turns the template cache off (`true`) or on (`false`).
    pub fn with_cache_disabled(mut self, disabled: bool) -> Self {
        self.disable_cache = disabled;
        self
    }

    pub fn source(&self) -> &dyn ContentSource {
        self.source.as_ref()
    }

    pub fn layout(&self) -> &str {
        &self.layout
    }

    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    /// Mutable access to the registry, for adding functions after construction.
    pub fn functions_mut(&mut self) -> &mut FunctionRegistry {
        &mut self.functions
    }

    pub fn cache_disabled(&self) -> bool {
        self.disable_cache
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(FsSource::default())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("layout", &self.layout)
            .field("functions", &self.functions)
            .field("disable_cache", &self.disable_cache)
            .finish_non_exhaustive()
    }
}

/// File-friendly renderer settings for a filesystem-backed setup.
///
/// All fields are optional in YAML and fall back to the [`Config::default`]
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory views are read from.
    pub root: PathBuf,
    /// Extension appended to logical names.
    pub extension: String,
    /// Logical name of the layout.
    pub layout: String,
    /// Recompile on every render.
    pub disable_cache: bool,
}

impl Settings {
    /// Parses settings from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, RenderError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Builds a filesystem-backed [`Config`] from these settings.
    pub fn into_config(self) -> Config {
        Config::new(FsSource::new(self.root, self.extension))
            .with_layout(self.layout)
            .with_cache_disabled(self.disable_cache)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_VIEWS_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            layout: DEFAULT_LAYOUT.to_string(),
            disable_cache: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.layout(), "layout");
        assert!(!config.cache_disabled());
        assert!(config.functions().is_empty());
    }

    #[test]
    fn test_debug_disables_cache() {
        let config = Config::debug();
        assert!(config.cache_disabled());
        assert_eq!(config.layout(), DEFAULT_LAYOUT);
    }

    #[test]
    fn test_builder_setters() {
        let config = Config::default()
            .with_layout("base")
            .with_cache_disabled(true);
        assert_eq!(config.layout(), "base");
        assert!(config.cache_disabled());
    }

    #[test]
    fn test_settings_defaults_from_empty_mapping() {
        let settings = Settings::from_yaml("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_partial_override() {
        let settings = Settings::from_yaml("extension: .jinja\ndisable_cache: true").unwrap();
        assert_eq!(settings.extension, ".jinja");
        assert!(settings.disable_cache);
        assert_eq!(settings.layout, "layout");
        assert_eq!(settings.root, PathBuf::from("views"));
    }

    #[test]
    fn test_settings_invalid_yaml() {
        let err = Settings::from_yaml("disable_cache: [not, a, bool]").unwrap_err();
        assert!(matches!(err, RenderError::Settings(_)));
    }

    #[test]
    fn test_config_debug_output_hides_source() {
        let rendered = format!("{:?}", Config::default());
        assert!(rendered.contains("layout"));
        assert!(rendered.contains(".."));
    }
}
