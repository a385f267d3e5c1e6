//! Handing renders to a web framework.
//!
//! Frameworks usually split a response body into "set the headers" and "write
//! the body". A [`Page`] captures the template name and data up front so the
//! framework can do both later: [`Page::write_content_type`] fills in
//! `Content-Type: text/html; charset=utf-8` unless the handler already chose
//! one, and [`Page::render`] writes the layout-wrapped page.
//!
//! ```rust
//! use http::HeaderMap;
//! use standout_html::{Config, MemorySource, Page, Renderer};
//!
//! let views = MemorySource::new()
//!     .with("layout", "<body>{% include page %}</body>")
//!     .with("home", "{{ msg }}");
//! let renderer = Renderer::new(Config::new(views));
//! let page = renderer.page("home", &serde_json::json!({ "msg": "ok" }));
//!
//! let mut headers = HeaderMap::new();
//! Page::write_content_type(&mut headers);
//! let mut body = Vec::new();
//! page.render(&mut body).unwrap();
//!
//! assert_eq!(headers["content-type"], "text/html; charset=utf-8");
//! assert_eq!(body, b"<body>ok</body>");
//! ```

use std::io;

use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use minijinja::Value;

use crate::error::RenderError;
use crate::renderer::Renderer;

/// Content type of every rendered page.
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// A pending layout-wrapped render of one template.
#[derive(Debug, Clone)]
pub struct Page {
    renderer: Renderer,
    name: String,
    data: Value,
}

impl Page {
    pub(crate) fn new(renderer: Renderer, name: String, data: Value) -> Self {
        Self {
            renderer,
            name,
            data,
        }
    }

    /// Logical name of the template.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders the page, always wrapped in the layout.
    pub fn render<W: io::Write>(&self, out: W) -> Result<(), RenderError> {
        self.renderer
            .render_value(out, &self.name, self.data.clone(), true, 0)
    }

    /// Renders the page into a string.
    pub fn render_to_string(&self) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.render(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Sets the HTML content type unless one is already present.
    pub fn write_content_type(headers: &mut HeaderMap) {
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE));
        }
    }
}
