//! # Category Module
//!
//! Keyword-based article classification. Articles that do not name a
//! category in their frontmatter are matched against an ordered rule
//! table; the first rule that hits assigns the category, and articles no
//! rule claims fall back to `"Other"`.
//!
//! - `builtin`: default rule table and runtime rule types
//! - `classifier`: the rule-ordered matcher

mod builtin;
mod classifier;

pub use builtin::{
    builtin_rules, BuiltinMatcher, BuiltinRule, CategoryRule, MatchField, Matcher, BUILTIN_RULES,
    DEFAULT_CATEGORY, DEFAULT_CATEGORY_ORDER,
};
pub use classifier::KeywordClassifier;
