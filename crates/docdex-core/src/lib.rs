pub mod article;
pub mod category;
pub mod config;
pub mod error;
pub mod extract;
pub mod frontmatter;
pub mod render;
pub mod scan;
pub mod splice;

pub use article::{normalize_path, Article};
pub use category::{
    builtin_rules, CategoryRule, KeywordClassifier, MatchField, Matcher, BUILTIN_RULES,
    DEFAULT_CATEGORY, DEFAULT_CATEGORY_ORDER,
};
pub use config::{Config, RenderConfig, ScanConfig};
pub use error::{DocdexError, Result};
pub use extract::Extractor;
pub use frontmatter::{Frontmatter, Validation, ValidationStatus};
pub use render::{category_counts, group_by_category, render_section, SECTION_HEADING};
pub use scan::{scan_articles, ScanOutcome, SkippedFile};
pub use splice::{splice_section, update_readme};

#[cfg(test)]
mod pipeline_tests {
    use super::*;
    use std::fs;

    fn run_pipeline(base: &std::path::Path) -> String {
        let config = Config::load(base).unwrap();
        let outcome = scan_articles(&base.join("articles"), &config).unwrap();
        let section = render_section(&outcome.articles, &config.render);
        update_readme(&base.join("README.md"), &section).unwrap();
        fs::read_to_string(base.join("README.md")).unwrap()
    }

    #[test]
    fn test_full_pipeline_updates_readme() {
        let tmp = tempfile::TempDir::new().unwrap();
        let articles = tmp.path().join("articles");
        fs::create_dir(&articles).unwrap();
        fs::write(
            articles.join("setup-guide.md"),
            "# Setup Guide\n\nHow to get a working environment.\n",
        )
        .unwrap();
        fs::write(
            articles.join("api-reference.qmd"),
            "---\ntitle: API Reference\nsubtitle: Every endpoint\n---\nBody.\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join("README.md"),
            "# Repo\n\n## Documentation\nstale\n\n## Adding New Articles\nDrop a file in articles/.\n",
        )
        .unwrap();

        let readme = run_pipeline(tmp.path());
        assert!(readme.contains("### Process & Framework Documentation"));
        assert!(readme.contains("- [Setup Guide](articles/setup-guide.md) - How to get a working environment."));
        assert!(readme.contains("- [API Reference](articles/api-reference.qmd) - Every endpoint"));
        assert!(readme.contains("## Adding New Articles\nDrop a file in articles/.\n"));
        assert!(!readme.contains("stale"));
    }

    #[test]
    fn test_full_pipeline_is_idempotent() {
        let tmp = tempfile::TempDir::new().unwrap();
        let articles = tmp.path().join("articles");
        fs::create_dir(&articles).unwrap();
        fs::write(articles.join("notes.md"), "# Notes\n\nPlain notes.\n").unwrap();
        fs::write(tmp.path().join("README.md"), "# Repo\n\nIntro.\n").unwrap();

        let first = run_pipeline(tmp.path());
        let second = run_pipeline(tmp.path());
        assert_eq!(first, second);
    }
}
