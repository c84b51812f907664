//! Article metadata extraction.
//!
//! Derives title, description, and category for one document. Each field
//! falls through a fixed chain: frontmatter, then document structure, then
//! a filename or keyword fallback. Extraction always succeeds on text
//! input; a fully populated [`Article`] comes back for every file.

use std::path::Path;

use crate::article::{normalize_path, Article};
use crate::category::KeywordClassifier;
use crate::frontmatter;

/// Descriptions are cut at this many characters to keep list items on one
/// line under markdown lint rules.
const DESCRIPTION_MAX_CHARS: usize = 80;

/// Extracts [`Article`] records from raw document text.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    classifier: KeywordClassifier,
}

impl Extractor {
    pub fn new(classifier: KeywordClassifier) -> Self {
        Self { classifier }
    }

    /// Extract metadata for one document.
    pub fn extract(&self, path: &Path, content: &str) -> Article {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let mut title = String::new();
        let mut description = String::new();
        let mut category = String::new();

        let fm = frontmatter::parse(content);
        if let Some(ref fm) = fm {
            if let Some(value) = fm.get("title") {
                title = value.trim().to_string();
            }
            if let Some(value) = fm.get("subtitle") {
                description = value.trim().to_string();
            }
            if let Some(value) = fm.get("category") {
                category = value.trim().to_string();
            }
        }

        let body = fm.as_ref().map(|fm| fm.body(content)).unwrap_or(content);

        if title.is_empty() {
            title = first_heading(body)
                .map(|h| h.to_string())
                .unwrap_or_else(|| fallback_title(&file_name));
        }

        if description.is_empty() {
            description = first_paragraph(body).unwrap_or_default();
        }

        if category.is_empty() {
            category = self.classifier.classify(&file_name, &title, content);
        }

        Article {
            file_name,
            file_path: normalize_path(path),
            title,
            description,
            category,
        }
    }
}

/// First top-level heading: a line whose `#` is followed by whitespace.
fn first_heading(body: &str) -> Option<&str> {
    for line in body.lines() {
        let text = line.trim_end_matches('\r');
        if let Some(rest) = text.strip_prefix('#') {
            if rest.starts_with(char::is_whitespace) && !rest.trim().is_empty() {
                return Some(rest.trim());
            }
        }
    }
    None
}

/// Title derived from the filename: extension stripped, hyphens to spaces.
fn fallback_title(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string());
    stem.replace('-', " ")
}

/// First qualifying paragraph of the body, heading removed, line breaks
/// collapsed, truncated to [`DESCRIPTION_MAX_CHARS`].
fn first_paragraph(body: &str) -> Option<String> {
    let without_heading = strip_first_heading(body);

    let candidate = without_heading
        .split("\n\n")
        .map(str::trim)
        .find(|p| {
            !p.is_empty() && !p.starts_with('#') && !p.starts_with("```") && !p.starts_with('-')
        })?;

    let collapsed = candidate.replace("\r\n", "\n").replace('\n', " ");
    if collapsed.chars().count() > DESCRIPTION_MAX_CHARS {
        let mut truncated: String = collapsed.chars().take(DESCRIPTION_MAX_CHARS).collect();
        truncated.push_str("...");
        Some(truncated)
    } else {
        Some(collapsed)
    }
}

/// Remove the first top-level heading line, keeping everything else.
fn strip_first_heading(body: &str) -> String {
    let mut removed = false;
    let mut out = String::with_capacity(body.len());

    for line in body.split_inclusive('\n') {
        if !removed {
            let text = line.trim_end_matches('\n').trim_end_matches('\r');
            if let Some(rest) = text.strip_prefix('#') {
                if rest.starts_with(char::is_whitespace) && !rest.trim().is_empty() {
                    removed = true;
                    continue;
                }
            }
        }
        out.push_str(line);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn extract(name: &str, content: &str) -> Article {
        Extractor::default().extract(&PathBuf::from("articles").join(name), content)
    }

    #[test]
    fn test_title_from_frontmatter() {
        let article = extract("doc.qmd", "---\ntitle: Release Checklist\n---\nBody.\n");
        assert_eq!(article.title, "Release Checklist");
    }

    #[test]
    fn test_title_quotes_stripped() {
        let article = extract("doc.qmd", "---\ntitle: \"Release Checklist\"\n---\n");
        assert_eq!(article.title, "Release Checklist");
    }

    #[test]
    fn test_title_from_first_heading() {
        let article = extract("doc.md", "# Hello World\n\nSome text.\n");
        assert_eq!(article.title, "Hello World");
    }

    #[test]
    fn test_title_skips_subheadings() {
        let article = extract("doc.md", "## Not This\n\n# This One\n");
        assert_eq!(article.title, "This One");
    }

    #[test]
    fn test_title_fallback_from_filename() {
        let article = extract("my-doc.md", "plain text only\n");
        assert_eq!(article.title, "my doc");
    }

    #[test]
    fn test_heading_after_frontmatter() {
        let article = extract("doc.qmd", "---\nsubtitle: A subtitle\n---\n# Real Title\n");
        assert_eq!(article.title, "Real Title");
        assert_eq!(article.description, "A subtitle");
    }

    #[test]
    fn test_description_from_subtitle() {
        let article = extract("doc.qmd", "---\ntitle: T\nsubtitle: Short summary\n---\nLong body paragraph.\n");
        assert_eq!(article.description, "Short summary");
    }

    #[test]
    fn test_description_from_first_paragraph() {
        let article = extract("doc.md", "# Title\n\nThe first paragraph.\n\nThe second.\n");
        assert_eq!(article.description, "The first paragraph.");
    }

    #[test]
    fn test_description_skips_code_and_lists() {
        let content = "# Title\n\n```sh\ncargo run\n```\n\n- a list item\n\nReal prose here.\n";
        let article = extract("doc.md", content);
        assert_eq!(article.description, "Real prose here.");
    }

    #[test]
    fn test_description_collapses_line_breaks() {
        let article = extract("doc.md", "# Title\n\nspans\ntwo lines.\n");
        assert_eq!(article.description, "spans two lines.");
    }

    #[test]
    fn test_description_truncated_at_80() {
        let paragraph = "a".repeat(95);
        let article = extract("doc.md", &format!("# Title\n\n{}\n", paragraph));
        assert_eq!(article.description.chars().count(), 83);
        assert!(article.description.ends_with("..."));
        assert!(article.description.starts_with(&"a".repeat(80)));
    }

    #[test]
    fn test_description_short_paragraph_verbatim() {
        let paragraph = "b".repeat(40);
        let article = extract("doc.md", &format!("# Title\n\n{}\n", paragraph));
        assert_eq!(article.description, paragraph);
    }

    #[test]
    fn test_description_empty_when_nothing_qualifies() {
        let article = extract("doc.md", "# Title\n\n- only\n- lists\n");
        assert_eq!(article.description, "");
    }

    #[test]
    fn test_category_from_frontmatter_wins() {
        let article = extract("tech-stack.md", "---\ncategory: Custom\n---\n# T\n");
        assert_eq!(article.category, "Custom");
    }

    #[test]
    fn test_category_from_keywords() {
        let article = extract("tech-stack.md", "# Stack\n\nWhat we run on.\n");
        assert_eq!(article.category, "Infrastructure & Development");
    }

    #[test]
    fn test_category_defaults_to_other() {
        let article = extract("notes.md", "# Notes\n\nNothing special.\n");
        assert_eq!(article.category, "Other");
    }

    #[test]
    fn test_unterminated_frontmatter_treated_as_body() {
        let article = extract("doc.md", "---\ntitle: Never Closed\n");
        // No block parsed, no heading; the filename fallback applies
        assert_eq!(article.title, "doc");
    }

    #[test]
    fn test_file_path_normalized() {
        let article = extract("guide.md", "# G\n");
        assert_eq!(article.file_path, "articles/guide.md");
        assert_eq!(article.file_name, "guide.md");
    }
}
