//! # Standout HTML - Layout-Aware Page Rendering
//!
//! `standout-html` renders HTML pages for web applications from a shared
//! layout plus named content templates and partials. It sits between a
//! request handler and the template engine ([MiniJinja]) and owns loading,
//! compiling, caching and composing templates.
//!
//! ## Core Concepts
//!
//! - [`Renderer`]: resolves a logical name to a compiled template and executes it
//! - [`ContentSource`]: where template text comes from ([`FsSource`],
//!   [`EmbeddedSource`], [`MemorySource`], or any closure)
//! - Layout: the outer template every page is combined with (`"layout"` by default)
//! - [`FunctionRegistry`]: extra functions available in every template
//! - [`TemplateCache`]: compiled templates by name, compiled once per name
//! - [`Page`]: a captured page render for a host framework
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use standout_html::{Config, MemorySource, Renderer};
//!
//! #[derive(Serialize)]
//! struct Home { title: String, items: Vec<&'static str> }
//!
//! let views = MemorySource::new()
//!     .with("layout", "<title>{{ title }}</title>{% include page %}")
//!     .with("home", "{% for i in items %}{{ partial(\"item\", i) }}{% endfor %}")
//!     .with("partials/item", "<li>{{ this }}</li>");
//!
//! let renderer = Renderer::new(Config::new(views));
//! let html = renderer
//!     .render_page("home", &Home { title: "Shop".into(), items: vec!["a", "b"] })
//!     .unwrap();
//! assert_eq!(html, "<title>Shop</title><li>a</li><li>b</li>");
//! ```
//!
//! ## Pages and Fragments
//!
//! A page render executes the layout, which pulls the requested template in
//! through the `page` binding (`{% include page %}`), so one layout wraps
//! every page. A fragment render executes the template on its own. Inside
//! templates:
//!
//! | Helper | Renders | Data |
//! |--------|---------|------|
//! | `partial("card", x)` | `partials/card` | `x` |
//! | `include("sidebar")` | `sidebar` | the calling render's data |
//!
//! Each render also sees its data as `this` and its own logical name as
//! `page`. These bindings hide data keys of the same name, see
//! [`RESERVED_CONTEXT_NAMES`].
//!
//! ## Caching
//!
//! Compiled templates are cached by name and never evicted. With
//! [`Config::debug`] (or `disable_cache`) nothing is cached and every render
//! reloads the layout and template from the source.
//!
//! [MiniJinja]: https://docs.rs/minijinja

pub mod cache;
pub mod config;
mod error;
pub mod functions;
pub mod page;
mod renderer;
pub mod source;
pub mod template;

pub use cache::TemplateCache;
pub use config::{
    Config, Settings, DEFAULT_EXTENSION, DEFAULT_LAYOUT, DEFAULT_VIEWS_ROOT, PARTIALS_NAMESPACE,
};
pub use error::{LoadError, RenderError};
pub use functions::{FunctionRegistry, RESERVED_CONTEXT_NAMES, RESERVED_FUNCTIONS};
pub use page::{Page, HTML_CONTENT_TYPE};
pub use renderer::{partial_name, Renderer, MAX_NESTING_DEPTH};
pub use source::{ContentSource, EmbeddedSource, FsSource, MemorySource};
pub use template::CompiledTemplate;

#[cfg(feature = "macros")]
pub use standout_html_macros::embed_views;
