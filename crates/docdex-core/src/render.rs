//! Grouping and markdown rendering.
//!
//! Partitions articles by category, sorts each group by title, and renders
//! the `## Documentation` section. Categories outside the configured order
//! are counted but never rendered.

use std::collections::HashMap;

use crate::article::Article;
use crate::config::RenderConfig;

/// Heading of the generated section.
pub const SECTION_HEADING: &str = "## Documentation";

/// Group articles by category, each group sorted by title ascending.
pub fn group_by_category(articles: &[Article]) -> HashMap<&str, Vec<&Article>> {
    let mut grouped: HashMap<&str, Vec<&Article>> = HashMap::new();
    for article in articles {
        grouped.entry(article.category.as_str()).or_default().push(article);
    }
    for group in grouped.values_mut() {
        group.sort_by(|a, b| a.title.cmp(&b.title));
    }
    grouped
}

/// Per-category article counts, in order of first encounter.
pub fn category_counts(articles: &[Article]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for article in articles {
        match counts.iter_mut().find(|(c, _)| c == &article.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((article.category.clone(), 1)),
        }
    }
    counts
}

/// Render the full documentation section, trailing whitespace trimmed.
pub fn render_section(articles: &[Article], config: &RenderConfig) -> String {
    let grouped = group_by_category(articles);

    let mut markdown = format!("{}\n\n", SECTION_HEADING);

    for category in &config.category_order {
        let Some(group) = grouped.get(category.as_str()) else {
            continue;
        };
        if group.is_empty() {
            continue;
        }

        markdown.push_str(&format!("### {}\n\n", category));
        for article in group {
            let link = relative_link(&article.file_path, &config.path_anchor);
            markdown.push_str(&format!("- [{}]({})", article.title, link));
            if !article.description.is_empty() {
                markdown.push_str(&format!(" - {}", article.description));
            }
            markdown.push('\n');
        }
        markdown.push('\n');
    }

    markdown.trim_end().to_string()
}

/// Keep the path from the first `<anchor>/` segment onward; the full path
/// when the segment is absent.
pub fn relative_link<'a>(path: &'a str, anchor: &str) -> &'a str {
    let needle = format!("{}/", anchor);
    for (index, _) in path.match_indices(&needle) {
        if index == 0 || path.as_bytes()[index - 1] == b'/' {
            return &path[index..];
        }
    }
    path
}
