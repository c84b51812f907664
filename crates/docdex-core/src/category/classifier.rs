//! Keyword classifier.
//!
//! Assigns a category to an article by matching keyword rules against its
//! file name, title, and a bounded prefix of its content. Rules are
//! evaluated in order and the first hit wins; nothing after a match is
//! considered.

use super::builtin::{builtin_rules, CategoryRule, MatchField, DEFAULT_CATEGORY};

/// Content inspection is limited to this many characters.
const CONTENT_PROBE_CHARS: usize = 1000;

/// Rule-ordered keyword classifier.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    rules: Vec<CategoryRule>,
    default_category: String,
}

impl KeywordClassifier {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self {
            rules,
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Classifier backed by the builtin rule table.
    pub fn builtin() -> Self {
        Self::new(builtin_rules())
    }

    /// Category names in rule order.
    pub fn category_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.category.as_str()).collect()
    }

    /// Classify one article. Matching is case-insensitive; `content` is
    /// truncated to its first 1000 characters before inspection.
    pub fn classify(&self, file_name: &str, title: &str, content: &str) -> String {
        let name = file_name.to_lowercase();
        let title = title.to_lowercase();
        let content: String = content
            .chars()
            .take(CONTENT_PROBE_CHARS)
            .collect::<String>()
            .to_lowercase();

        for rule in &self.rules {
            let hit = rule.matchers.iter().any(|m| {
                let field = match m.field {
                    MatchField::Name => name.as_str(),
                    MatchField::Title => title.as_str(),
                    MatchField::Content => content.as_str(),
                };
                field.contains(&m.token)
                    && m.unless
                        .as_deref()
                        .map_or(true, |unless| !field.contains(unless))
            });
            if hit {
                return rule.category.clone();
            }
        }

        self.default_category.clone()
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}
