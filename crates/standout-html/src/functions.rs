//! Template functions.
//!
//! Every compiled template sees the functions of the renderer's
//! [`FunctionRegistry`] as globals. On top of those, two helpers are always
//! available and cannot be overridden:
//!
//! - `partial(name, data)` renders `partials/<name>` against `data`, without
//!   the layout, and returns the result as safe HTML.
//! - `include(name)` renders `name` against the data of the render that calls
//!   it, without the layout, and returns the result as safe HTML.
//!
//! The helpers are bound per render call (see the renderer module), so the
//! registry itself is never mutated while rendering.
//!
//! ```rust
//! use minijinja::Value;
//! use standout_html::FunctionRegistry;
//!
//! let mut functions = FunctionRegistry::new();
//! functions
//!     .add_function("shout", Value::from_function(|s: String| s.to_uppercase()))
//!     .unwrap();
//! assert!(functions.contains("shout"));
//! assert!(functions.add_function("partial", Value::from(1)).is_err());
//! ```

use std::collections::BTreeMap;

use minijinja::{Environment, Value};

use crate::error::RenderError;

/// Names the renderer binds itself on every render.
pub const RESERVED_FUNCTIONS: &[&str] = &["partial", "include"];

/// Names bound into the context of every render, on top of the data.
///
/// `partial` and `include` are the helpers, `this` is the render's data and
/// `page` its logical name. A data key with one of these names is hidden by
/// the binding; it stays reachable as `this.<key>` when the data is a map.
pub const RESERVED_CONTEXT_NAMES: &[&str] = &["partial", "include", "this", "page"];

/// User-supplied template functions, installed into every compiled template.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: BTreeMap<String, Value>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a function (any callable [`Value`], usually built with
    /// [`Value::from_function`]) under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ReservedFunction`] for any of
    /// [`RESERVED_CONTEXT_NAMES`], which would hide the function.
    pub fn add_function(
        &mut self,
        name: impl Into<String>,
        function: Value,
    ) -> Result<&mut Self, RenderError> {
        let name = name.into();
        if RESERVED_CONTEXT_NAMES.contains(&name.as_str()) {
            return Err(RenderError::ReservedFunction(name));
        }
        self.functions.insert(name, function);
        Ok(self)
    }

    /// Builder-style [`add_function`](Self::add_function).
    pub fn with_function(
        mut self,
        name: impl Into<String>,
        function: Value,
    ) -> Result<Self, RenderError> {
        self.add_function(name, function)?;
        Ok(self)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Installs every function as a global of `env`.
    pub(crate) fn install(&self, env: &mut Environment<'static>) {
        for (name, function) in &self.functions {
            env.add_global(name.clone(), function.clone());
        }
    }
}
