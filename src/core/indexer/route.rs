//! Route and title resolution.
//!
//! A route is assembled from three parts, in this order: the site
//! base URL, the docs section (`route_base_path`) and the document's
//! path relative to the docs directory with its extension removed.
//! Duplicate separators produced by the concatenation are collapsed
//! afterwards, which keeps the result correct whether the base URL
//! is empty, `/` or a deep sub-path.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Route base path meaning "no section segment"
pub const ROOT_ROUTE_BASE: &str = "/";

/// Title used when no other candidate is available
pub const UNTITLED: &str = "Untitled";

static DOC_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(md|mdx)$").expect("valid extension regex"));

static REPEATED_SLASHES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/{2,}").expect("valid separator regex"));

/// Remove a trailing `.md` / `.mdx` extension (case-insensitive)
pub fn strip_extension(path: &str) -> &str {
    match DOC_EXTENSION.find(path) {
        Some(m) => &path[..m.start()],
        None => path,
    }
}

/// Build the public route for a document
///
/// # Arguments
///
/// * `relative_path` - Path relative to the docs directory
///   (either separator style)
/// * `base_url` - Site base URL, e.g. `/site/`
/// * `route_base_path` - Docs section, `/` for none
///
/// # Example
///
/// ```
/// use mdindex::core::indexer::route::resolve_route;
///
/// assert_eq!(resolve_route("a//b.md", "/site/", "docs"), "/site/docs/a/b");
/// assert_eq!(resolve_route("intro.md", "/", "/"), "/intro");
/// ```
pub fn resolve_route(relative_path: &str, base_url: &str, route_base_path: &str) -> String {
    let relative = relative_path.replace('\\', "/");
    let base = base_url.strip_suffix('/').unwrap_or(base_url);

    let middle = if route_base_path == ROOT_ROUTE_BASE {
        String::new()
    } else {
        format!("/{route_base_path}")
    };

    let route = format!("{base}{middle}/{}", strip_extension(&relative));
    let route = REPEATED_SLASHES.replace_all(&route, "/").into_owned();

    if route.starts_with('/') {
        route
    } else {
        format!("/{route}")
    }
}

/// Pick the display title for a document
///
/// Precedence, first non-empty wins:
/// 1. the front matter `title`
/// 2. the file's base name with `-` and `_` turned into spaces
/// 3. [`UNTITLED`]
pub fn resolve_title(front_matter_title: Option<&Value>, relative_path: &str) -> String {
    if let Some(title) = front_matter_title.and_then(title_text) {
        return title;
    }

    let relative = relative_path.replace('\\', "/");
    let stem = strip_extension(&relative);
    let base_name = stem.rsplit('/').next().unwrap_or(stem);
    let from_file = base_name.replace(['-', '_'], " ");
    if !from_file.trim().is_empty() {
        return from_file;
    }

    UNTITLED.to_string()
}

/// Render a front matter title value, if it is usable
fn title_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
