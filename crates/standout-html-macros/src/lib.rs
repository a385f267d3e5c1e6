//! Proc macros for standout-html.
//!
//! # Available Macros
//!
//! - [`embed_views!`] - Embed view files (`.html`, `.htm`) into the binary
//!
//! The macro returns an [`EmbeddedSource`] holding both the embedded content
//! (baked into the binary at compile time) and the directory it came from, so
//! debug builds can keep reading the files from disk.
//!
//! [`EmbeddedSource`]: standout_html::EmbeddedSource

mod embed;

use proc_macro::TokenStream;
use syn::{parse_macro_input, LitStr};

/// Embeds all view files from a directory at compile time.
///
/// The path is resolved relative to the `CARGO_MANIFEST_DIR` of the crate
/// invoking the macro. Every file ending in `.html` or `.htm` is embedded
/// under its relative path, extension included (`partials/card.html`).
///
/// The result is a `standout_html::EmbeddedSource` which implements
/// `ContentSource`, so it can be handed straight to `Config::new`:
///
/// ```rust,ignore
/// use standout_html::{embed_views, Config, Renderer};
///
/// let renderer = Renderer::new(Config::new(embed_views!("views")));
/// ```
///
/// # Hot Reload Behavior
///
/// - **Release builds**: Uses embedded content (zero file I/O)
/// - **Debug builds**: Reads from disk if the source directory exists
///
/// # Compile-Time Errors
///
/// The macro will fail to compile if:
/// - The directory doesn't exist
/// - The directory is not readable
/// - Any file content is not valid UTF-8
#[proc_macro]
pub fn embed_views(input: TokenStream) -> TokenStream {
    let path = parse_macro_input!(input as LitStr);
    embed::embed_views_impl(path).into()
}
