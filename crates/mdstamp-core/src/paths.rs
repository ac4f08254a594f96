use std::path::{Component, Path};

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

/// Directory whose child names the project a document belongs to.
pub const PROJECT_MARKER: &str = "mcp-servers";
/// Project used when the marker is absent or has no child segment.
pub const DEFAULT_PROJECT: &str = "local-instances";
/// Dependency directory never descended into.
pub const EXCLUDED_DIR: &str = "node_modules";
pub const MARKDOWN_EXT: &str = "md";
pub const README_NAME: &str = "readme.md";

pub const TEST_DIR: &str = "src/tests";
pub const TEST_SUFFIX: &str = ".test.ts";
pub const PATCHED_TEST_FILE: &str = "conversation-flow-tools.test.ts";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// The normal (named) segments of a path, skipping root and prefix components
/// and any segment that is not valid UTF-8.
pub fn segments(path: &Path) -> Vec<&str> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect()
}

/// File name as a string, empty when the path has none.
pub fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

/// `path` relative to `root` for display; falls back to the full path.
pub fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
