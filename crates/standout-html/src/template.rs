//! Compiled templates.
//!
//! A [`CompiledTemplate`] is a minijinja environment holding the layout and,
//! for content templates, the named content template next to it. Because both
//! live in the same environment the layout can pull the content in with
//! `{% include page %}`.
//!
//! Compiled templates are immutable once built and are shared through the
//! cache behind an `Arc`.

use std::io;

use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use crate::functions::FunctionRegistry;

/// A layout, optionally combined with one content template, ready to execute.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    env: Environment<'static>,
    name: String,
    layout: String,
}

impl CompiledTemplate {
    /// Compiles the layout on its own.
    pub(crate) fn layout(
        layout: &str,
        source: String,
        functions: &FunctionRegistry,
    ) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        functions.install(&mut env);
        env.add_template_owned(layout.to_string(), source)?;

        Ok(Self {
            env,
            name: layout.to_string(),
            layout: layout.to_string(),
        })
    }

    /// Compiles `source` as `name` next to this layout.
    pub(crate) fn with_content(&self, name: &str, source: String) -> Result<Self, minijinja::Error> {
        let mut env = self.env.clone();
        env.add_template_owned(name.to_string(), source)?;

        Ok(Self {
            env,
            name: name.to_string(),
            layout: self.layout.clone(),
        })
    }

    /// Logical name this template was compiled for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the layout definition.
    pub fn layout_name(&self) -> &str {
        &self.layout
    }

    /// Returns true if `definition` can be executed.
    pub fn has_definition(&self, definition: &str) -> bool {
        self.env.get_template(definition).is_ok()
    }

    /// Executes `definition` against `ctx`, streaming into `out`.
    pub(crate) fn execute<W: io::Write>(
        &self,
        definition: &str,
        ctx: Value,
        out: W,
    ) -> Result<(), minijinja::Error> {
        let template = self.env.get_template(definition)?;
        template.render_captured_to(ctx, out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    fn layout() -> CompiledTemplate {
        CompiledTemplate::layout(
            "layout",
            "<body>{% include \"home\" %}</body>".to_string(),
            &FunctionRegistry::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_layout_alone_has_single_definition() {
        let compiled = layout();
        assert_eq!(compiled.name(), "layout");
        assert!(compiled.has_definition("layout"));
        assert!(!compiled.has_definition("home"));
    }

    #[test]
    fn test_content_shares_environment_with_layout() {
        let page = layout()
            .with_content("home", "Hi {{ name }}".to_string())
            .unwrap();
        assert_eq!(page.name(), "home");
        assert_eq!(page.layout_name(), "layout");

        let mut out = Vec::new();
        page.execute("layout", context! { name => "Ada" }, &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "<body>Hi Ada</body>");

        let mut out = Vec::new();
        page.execute("home", context! { name => "Ada" }, &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hi Ada");
    }

    #[test]
    fn test_output_is_html_escaped() {
        let page = layout()
            .with_content("home", "{{ name }}".to_string())
            .unwrap();
        let mut out = Vec::new();
        page.execute("home", context! { name => "<b>" }, &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "&lt;b&gt;");
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let page = layout()
            .with_content("home", "{{ missing }}".to_string())
            .unwrap();
        let result = page.execute("home", context! {}, Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_syntax_error_on_compile() {
        let result = layout().with_content("home", "{{ unclosed".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_registry_functions_are_globals() {
        let functions = FunctionRegistry::new()
            .with_function("greet", Value::from_function(|n: String| format!("hey {n}")))
            .unwrap();
        let page = CompiledTemplate::layout("layout", "{{ greet(\"you\") }}".into(), &functions)
            .unwrap();
        let mut out = Vec::new();
        page.execute("layout", context! {}, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hey you");
    }
}
