//! Compile-time view embedding.
//!
//! The macro only discovers view files and includes them. Name resolution
//! (logical name plus extension) happens at runtime in `standout_html::EmbeddedSource`, the same
//! way it does for files read from disk.

use proc_macro2::TokenStream;
use quote::quote;
use std::path::{Path, PathBuf};
use syn::LitStr;

/// View file extensions picked up by `embed_views!`.
pub const VIEW_EXTENSIONS: &[&str] = &[".html", ".htm"];

/// A view file found under the embedded directory.
#[derive(Debug, PartialEq, Eq)]
struct ViewFile {
    /// Path relative to the view root, `/`-separated, extension included.
    name: String,
    /// Absolute path the content is included from.
    path: PathBuf,
}

/// Generates code building an `EmbeddedSource` from a view directory.
///
/// Contents go through `include_str!` so editing a view rebuilds the crate
/// that embeds it.
pub fn embed_views_impl(input: LitStr) -> TokenStream {
    let source_path = input.value();
    let dir_path = resolve_path(&source_path);

    let views = match find_views(&dir_path) {
        Ok(views) => views,
        Err(e) => {
            return syn::Error::new(input.span(), e).to_compile_error();
        }
    };

    // Absolute so hot reload works regardless of the runtime working directory
    let absolute_path = dir_path.to_string_lossy().to_string();

    let entries = views.iter().map(|view| {
        let name = &view.name;
        let path = view.path.to_string_lossy();
        quote! { (#name, include_str!(#path)) }
    });

    quote! {
        {
            static ENTRIES: &[(&str, &str)] = &[
                #(#entries),*
            ];
            ::standout_html::EmbeddedSource::new(ENTRIES, #absolute_path)
        }
    }
}

/// Resolves a path relative to the invoking crate's manifest directory.
fn resolve_path(path: &str) -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .expect("CARGO_MANIFEST_DIR should be set during compilation");
    Path::new(&manifest_dir).join(path)
}

/// Walks `root` and returns every view file under it, sorted by name.
fn find_views(root: &Path) -> Result<Vec<ViewFile>, String> {
    if !root.is_dir() {
        return Err(format!("view directory not found: {}", root.display()));
    }

    let mut views = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| format!("failed to read {}: {e}", dir.display()))?;
        for entry in entries {
            let path = entry
                .map_err(|e| format!("failed to read {}: {e}", dir.display()))?
                .path();
            if is_hidden(&path) {
                continue;
            }
            if path.is_dir() {
                pending.push(path);
            } else if let Some(name) = view_name(root, &path) {
                views.push(ViewFile { name, path });
            }
        }
    }

    // Deterministic output for reproducible builds
    views.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(views)
}

/// Name a view file is embedded under, or `None` for non-view files.
fn view_name(root: &Path, path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    if !VIEW_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext)) {
        return None;
    }
    let relative = path.strip_prefix(root).ok()?;
    let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
    Some(parts?.join("/"))
}

/// Dotfiles and dot-directories (editor swap files, `.git`) are never views.
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}
