//! Error types for loading, compiling and executing page templates.
//!
//! [`RenderError`] is what every render call returns. Its first three variants
//! map one-to-one onto the stages of a render: the content source could not
//! produce text, the text did not compile, or the compiled template failed
//! while running against the supplied data.

use std::io;
use std::path::PathBuf;

/// Error returned by a [`ContentSource`](crate::ContentSource).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source has nothing stored under this logical name.
    #[error("no content found for '{name}'")]
    NotFound {
        /// The logical name that was requested.
        name: String,
    },

    /// The backing storage failed while reading the content.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Physical path derived from the logical name.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Creates a not-found error for `name`.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}

/// Error type for all rendering operations.
///
/// Any error aborts the render that produced it. Errors raised inside a
/// `partial` or `include` helper are returned from the enclosing render
/// unchanged, so a missing partial surfaces as [`RenderError::ContentLoad`]
/// naming the partial, not as an execution error of the page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The content source could not produce text for a layout or template.
    #[error("failed to load template '{name}': {source}")]
    ContentLoad {
        name: String,
        #[source]
        source: LoadError,
    },

    /// The template source failed to parse.
    ///
    /// Nothing is cached for `name` when this happens.
    #[error("failed to compile template '{name}': {source}")]
    Compile {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// The compiled template failed while running against the data.
    ///
    /// Output written to the sink before the failure stays written.
    #[error("failed to execute template '{name}': {source}")]
    Execution {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// Partial and include renders nested deeper than the allowed limit.
    #[error("template '{name}' exceeds the nesting limit of {limit} partial/include renders")]
    NestingTooDeep { name: String, limit: usize },

    /// A function was registered under a name the renderer provides itself.
    #[error("function name '{0}' is reserved by the renderer")]
    ReservedFunction(String),

    /// Renderer settings could not be parsed.
    #[error("invalid renderer settings: {0}")]
    Settings(#[from] serde_yaml::Error),
}

impl RenderError {
    /// Returns the logical template name the error refers to, if any.
    pub fn template_name(&self) -> Option<&str> {
        match self {
            RenderError::ContentLoad { name, .. }
            | RenderError::Compile { name, .. }
            | RenderError::Execution { name, .. }
            | RenderError::NestingTooDeep { name, .. } => Some(name),
            RenderError::ReservedFunction(_) | RenderError::Settings(_) => None,
        }
    }

    pub(crate) fn content_load(name: &str, source: LoadError) -> Self {
        RenderError::ContentLoad {
            name: name.to_string(),
            source,
        }
    }

    pub(crate) fn compile(name: &str, source: minijinja::Error) -> Self {
        RenderError::Compile {
            name: name.to_string(),
            source,
        }
    }

    pub(crate) fn execution(name: &str, source: minijinja::Error) -> Self {
        RenderError::Execution {
            name: name.to_string(),
            source,
        }
    }
}
