//! Builtin classification rules.
//!
//! These reproduce the default keyword tables and are used whenever no
//! `[[rules]]` override is present in the config file.

use serde::{Deserialize, Serialize};

/// Category assigned when no rule matches and frontmatter is silent.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Default rendering order for categories.
pub const DEFAULT_CATEGORY_ORDER: &[&str] = &[
    "Process & Framework Documentation",
    "API Integration Guides",
    "Infrastructure & Development",
    DEFAULT_CATEGORY,
];

/// Which part of an article a matcher inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    /// File name
    Name,
    /// Extracted title
    Title,
    /// First 1000 characters of content
    Content,
}

/// Builtin rule table, evaluated in order; the first rule with a matching
/// matcher wins.
pub const BUILTIN_RULES: &[BuiltinRule] = &[
    BuiltinRule {
        category: "Infrastructure & Development",
        matchers: &[
            BuiltinMatcher::name("tech-stack"),
            BuiltinMatcher::name("technology"),
            BuiltinMatcher::name("ci-cd"),
            BuiltinMatcher::name("cicd"),
            BuiltinMatcher::name("infrastructure"),
            BuiltinMatcher::title("technology stack"),
            BuiltinMatcher::title("infrastructure"),
            BuiltinMatcher::title("ci/cd"),
            BuiltinMatcher::title("pipeline"),
        ],
    },
    BuiltinRule {
        category: "Process & Framework Documentation",
        matchers: &[
            // "api-guide.md" belongs to the API rule below, not here
            BuiltinMatcher::name("guide").unless("api"),
            BuiltinMatcher::name("process"),
            BuiltinMatcher::name("framework"),
            BuiltinMatcher::name("control"),
            BuiltinMatcher::name("lifecycle"),
            BuiltinMatcher::name("tracking"),
            BuiltinMatcher::title("framework"),
            BuiltinMatcher::title("process"),
            BuiltinMatcher::title("control"),
            BuiltinMatcher::content("process").unless("api"),
        ],
    },
    BuiltinRule {
        category: "API Integration Guides",
        matchers: &[
            BuiltinMatcher::name("api"),
            BuiltinMatcher::name("postman"),
            BuiltinMatcher::title("api"),
            BuiltinMatcher::content("api endpoint"),
        ],
    },
];

/// Static matcher definition.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinMatcher {
    pub field: MatchField,
    pub token: &'static str,
    /// Token that must be absent from the same field for the matcher to hit
    pub unless: Option<&'static str>,
}

impl BuiltinMatcher {
    const fn name(token: &'static str) -> Self {
        Self {
            field: MatchField::Name,
            token,
            unless: None,
        }
    }

    const fn title(token: &'static str) -> Self {
        Self {
            field: MatchField::Title,
            token,
            unless: None,
        }
    }

    const fn content(token: &'static str) -> Self {
        Self {
            field: MatchField::Content,
            token,
            unless: None,
        }
    }

    const fn unless(mut self, token: &'static str) -> Self {
        self.unless = Some(token);
        self
    }
}

/// Static rule definition.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinRule {
    pub category: &'static str,
    pub matchers: &'static [BuiltinMatcher],
}

/// Runtime matcher, builtin or loaded from `docdex.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matcher {
    pub field: MatchField,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unless: Option<String>,
}

/// Runtime rule definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: String,
    pub matchers: Vec<Matcher>,
}

impl From<&BuiltinRule> for CategoryRule {
    fn from(builtin: &BuiltinRule) -> Self {
        Self {
            category: builtin.category.to_string(),
            matchers: builtin
                .matchers
                .iter()
                .map(|m| Matcher {
                    field: m.field,
                    token: m.token.to_string(),
                    unless: m.unless.map(|u| u.to_string()),
                })
                .collect(),
        }
    }
}

/// Builtin table as runtime rules.
pub fn builtin_rules() -> Vec<CategoryRule> {
    BUILTIN_RULES.iter().map(CategoryRule::from).collect()
}
