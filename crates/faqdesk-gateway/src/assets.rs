//! Static asset helpers: content types, path guarding, and the built-in chat page.

use std::path::{Component, Path, PathBuf};

/// Placeholder in the built-in page replaced with the configured handoff notice.
const NOTICE_PLACEHOLDER: &str = "{{HANDOFF_NOTICE}}";

/// Content type for a static file, by extension.
pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "html" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" => "image/jpeg",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Join `relative` onto `root`, refusing anything that could leave `root`
/// (`..`, absolute paths, drive prefixes). Returns `None` for such paths.
pub fn resolve_within(root: &Path, relative: &str) -> Option<PathBuf> {
    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(resolved)
}

/// The chat page served when `public_dir/index.html` is absent.
pub fn builtin_index_html(handoff_notice: &str) -> String {
    include_str!("../assets/index.html").replace(NOTICE_PLACEHOLDER, &escape_attr(handoff_notice))
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
