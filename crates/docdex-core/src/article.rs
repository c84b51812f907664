use std::path::Path;

/// Metadata extracted from a single article file.
///
/// Built once per scanned file and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Base name of the source file
    pub file_name: String,
    /// Full path, normalized to forward slashes
    pub file_path: String,
    /// Always non-empty (frontmatter, first heading, or filename fallback)
    pub title: String,
    /// May be empty; at most 80 characters plus an ellipsis
    pub description: String,
    /// Frontmatter override, keyword match, or "Other"
    pub category: String,
}

/// Normalize a path to forward slashes for markdown links.
pub fn normalize_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}
