//! The page renderer.
//!
//! [`Renderer::render`] turns a logical template name and some data into HTML:
//!
//! 1. Look the name up in the cache (skipped when caching is disabled).
//! 2. On a miss, load the layout and the template from the content source,
//!    compile the layout, compile the template next to it, and cache both.
//! 3. Execute either the layout (`use_layout = true`, a page) or the template
//!    itself (`use_layout = false`, a fragment) against the data.
//!
//! # Partials and includes
//!
//! Templates can render other templates while they run:
//!
//! ```jinja
//! {{ partial("card", item) }}   {# partials/card against `item` #}
//! {{ include("sidebar") }}      {# sidebar against this render's data #}
//! ```
//!
//! Both re-enter the renderer synchronously and never wrap the fragment in
//! the layout. They are bound into the execution context of each render call
//! together with that call's data, so concurrent renders with different data
//! cannot observe each other's `include`. The data is also available as
//! `this`, which is how scalar data passed to a partial is reached.
//!
//! # Layouts
//!
//! Every render also binds `page` to the logical name being rendered. One
//! layout therefore serves every page by including whatever it was asked for:
//!
//! ```jinja
//! <main>{% include page %}</main>
//! ```
//!
//! Data keys named like one of these bindings are hidden by them, see
//! [`RESERVED_CONTEXT_NAMES`](crate::RESERVED_CONTEXT_NAMES).
//!
//! # Errors
//!
//! Any failure aborts the render. A failure inside a partial or include is
//! returned from the outer render as-is, so the error names the fragment that
//! actually failed.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use minijinja::{context, ErrorKind, Value};
use serde::Serialize;

use crate::cache::TemplateCache;
use crate::config::{Config, PARTIALS_NAMESPACE};
use crate::error::RenderError;
use crate::page::Page;
use crate::template::CompiledTemplate;

/// Maximum depth of nested `partial`/`include` renders.
pub const MAX_NESTING_DEPTH: usize = 32;

/// First error raised by a nested render during one execution.
type NestedFailure = Arc<Mutex<Option<RenderError>>>;

/// Renders layout-wrapped pages and standalone fragments.
///
/// Cloning is cheap and clones share the cache, so a single renderer can be
/// handed to every request handler.
///
/// ```rust
/// use serde::Serialize;
/// use standout_html::{Config, MemorySource, Renderer};
///
/// #[derive(Serialize)]
/// #[allow(non_snake_case)]
/// struct Welcome { Title: &'static str, Name: &'static str }
///
/// let views = MemorySource::new()
///     .with("layout", "{{ Title }} -- {% include page %}")
///     .with("home", "Hi {{ Name }}");
/// let renderer = Renderer::new(Config::new(views));
///
/// let html = renderer
///     .render_page("home", &Welcome { Title: "Welcome", Name: "Ada" })
///     .unwrap();
/// assert_eq!(html, "Welcome -- Hi Ada");
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: Config,
    cache: TemplateCache,
}

impl Renderer {
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                cache: TemplateCache::new(),
            }),
        }
    }

    /// Renderer over [`Config::debug`]: `views/<name>.html`, no caching.
    pub fn debug() -> Self {
        Self::new(Config::debug())
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn cache(&self) -> &TemplateCache {
        &self.inner.cache
    }

    /// Renders `name` against `data` into `out`.
    ///
    /// With `use_layout` the layout is executed (a full page); without it only
    /// the template named `name` is (a fragment). Bytes written before a
    /// failure stay in `out`.
    pub fn render<W, S>(
        &self,
        out: W,
        name: &str,
        data: &S,
        use_layout: bool,
    ) -> Result<(), RenderError>
    where
        W: io::Write,
        S: Serialize + ?Sized,
    {
        self.render_value(out, name, Value::from_serialize(data), use_layout, 0)
    }

    /// Renders into a string.
    pub fn render_to_string<S: Serialize + ?Sized>(
        &self,
        name: &str,
        data: &S,
        use_layout: bool,
    ) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.render(&mut buf, name, data, use_layout)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Renders `name` wrapped in the layout.
    pub fn render_page<S: Serialize + ?Sized>(
        &self,
        name: &str,
        data: &S,
    ) -> Result<String, RenderError> {
        self.render_to_string(name, data, true)
    }

    /// Renders `name` on its own.
    pub fn render_fragment<S: Serialize + ?Sized>(
        &self,
        name: &str,
        data: &S,
    ) -> Result<String, RenderError> {
        self.render_to_string(name, data, false)
    }

    /// Captures a page render for a host framework to run later.
    pub fn page<S: Serialize + ?Sized>(&self, name: impl Into<String>, data: &S) -> Page {
        Page::new(self.clone(), name.into(), Value::from_serialize(data))
    }

    pub(crate) fn render_value<W: io::Write>(
        &self,
        out: W,
        name: &str,
        data: Value,
        use_layout: bool,
        depth: usize,
    ) -> Result<(), RenderError> {
        if depth > MAX_NESTING_DEPTH {
            return Err(RenderError::NestingTooDeep {
                name: name.to_string(),
                limit: MAX_NESTING_DEPTH,
            });
        }

        let template = self.resolve(name)?;
        let definition = if use_layout {
            self.inner.config.layout()
        } else {
            name
        };

        let failure = NestedFailure::default();
        let ctx = self.execution_context(name, &data, depth, &failure);

        tracing::trace!(template = name, definition, depth, "executing template");
        template.execute(definition, ctx, out).map_err(|source| {
            failure
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take()
                .unwrap_or_else(|| RenderError::execution(name, source))
        })
    }

    /// Returns the compiled template for `name`, compiling it on a miss.
    fn resolve(&self, name: &str) -> Result<Arc<CompiledTemplate>, RenderError> {
        let cache = &self.inner.cache;
        if self.inner.config.cache_disabled() {
            return self.compile(name);
        }

        if let Some(template) = cache.lookup(name) {
            tracing::debug!(template = name, "template cache hit");
            return Ok(template);
        }

        let lock = cache.compile_lock(name);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        // Another render may have compiled it while we waited
        if let Some(template) = cache.lookup(name) {
            tracing::debug!(template = name, "template compiled by concurrent render");
            return Ok(template);
        }

        tracing::debug!(template = name, "template cache miss");
        self.compile(name)
    }

    /// Loads and compiles the layout and `name`, caching both on success.
    fn compile(&self, name: &str) -> Result<Arc<CompiledTemplate>, RenderError> {
        let config = &self.inner.config;
        let source = config.source();
        let layout_name = config.layout();

        let layout_source = source
            .load_content(layout_name)
            .map_err(|e| RenderError::content_load(layout_name, e))?;
        let layout = CompiledTemplate::layout(layout_name, layout_source, config.functions())
            .map(Arc::new)
            .map_err(|e| RenderError::compile(layout_name, e))?;

        let template = if name == layout_name {
            Arc::clone(&layout)
        } else {
            let content = source
                .load_content(name)
                .map_err(|e| RenderError::content_load(name, e))?;
            layout
                .with_content(name, content)
                .map(Arc::new)
                .map_err(|e| RenderError::compile(name, e))?
        };
        tracing::debug!(template = name, layout = layout_name, "compiled template");

        if !config.cache_disabled() {
            self.inner.cache.store(layout_name, layout);
            self.inner.cache.store(name, Arc::clone(&template));
        }

        Ok(template)
    }

    /// Builds the context one execution runs against: the data plus the
    /// `partial`, `include`, `this` and `page` bindings for this call.
    fn execution_context(
        &self,
        name: &str,
        data: &Value,
        depth: usize,
        failure: &NestedFailure,
    ) -> Value {
        let partial = {
            let renderer = self.clone();
            let failure = Arc::clone(failure);
            Value::from_function(
                move |name: String, data: Value| -> Result<Value, minijinja::Error> {
                    renderer.render_nested(&partial_name(&name), data, depth + 1, &failure)
                },
            )
        };

        let include = {
            let renderer = self.clone();
            let failure = Arc::clone(failure);
            let data = data.clone();
            Value::from_function(move |name: String| -> Result<Value, minijinja::Error> {
                renderer.render_nested(&name, data.clone(), depth + 1, &failure)
            })
        };

        context! {
            partial => partial,
            include => include,
            this => data.clone(),
            page => name,
            ..data.clone()
        }
    }

    /// Renders a fragment for a helper call and returns it as safe HTML.
    fn render_nested(
        &self,
        name: &str,
        data: Value,
        depth: usize,
        failure: &NestedFailure,
    ) -> Result<Value, minijinja::Error> {
        let mut buf = Vec::new();
        match self.render_value(&mut buf, name, data, false, depth) {
            Ok(()) => Ok(Value::from_safe_string(
                String::from_utf8_lossy(&buf).into_owned(),
            )),
            Err(err) => {
                let message = err.to_string();
                failure
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .get_or_insert(err);
                Err(minijinja::Error::new(ErrorKind::InvalidOperation, message))
            }
        }
    }
}

impl Default for Renderer {
    /// Renderer over [`Config::default`]: `views/<name>.html`, cached.
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Logical name `partial(name, ..)` renders.
pub fn partial_name(name: &str) -> String {
    format!("{}/{}", PARTIALS_NAMESPACE, name.trim_start_matches('/'))
}
