use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::category::{CategoryRule, KeywordClassifier, DEFAULT_CATEGORY_ORDER};
use crate::error::{DocdexError, Result};

const CONFIG_FILE: &str = "docdex.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# docdex configuration file
# Location: <base-dir>/docdex.toml
# Every key is optional; omitted keys keep the builtin behavior.

[scan]
# File extensions treated as articles
extensions = ["md", "qmd"]

[render]
# Categories are rendered in this order; empty ones are skipped and
# categories not listed here are not rendered at all.
category_order = [
    "Process & Framework Documentation",
    "API Integration Guides",
    "Infrastructure & Development",
    "Other",
]

# Article links keep the path from this segment onward
path_anchor = "articles"

# Classification rules may be replaced wholesale. Rules are tried in
# order; the first rule with a matching matcher wins. A matcher's
# `field` is "name", "title", or "content"; `unless` names a token that
# must be absent from the same field.
#
# [[rules]]
# category = "Runbooks"
# matchers = [
#     { field = "name", token = "runbook" },
#     { field = "title", token = "incident", unless = "postmortem" },
# ]
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub render: RenderConfig,

    /// Classifier rules; empty means the builtin table
    #[serde(default)]
    pub rules: Vec<CategoryRule>,
}

/// Scanning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Extensions treated as articles
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Category rendering order
    #[serde(default = "default_category_order")]
    pub category_order: Vec<String>,

    /// Path segment article links are trimmed to
    #[serde(default = "default_path_anchor")]
    pub path_anchor: String,
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "qmd".to_string()]
}

fn default_category_order() -> Vec<String> {
    DEFAULT_CATEGORY_ORDER
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_path_anchor() -> String {
    "articles".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            category_order: default_category_order(),
            path_anchor: default_path_anchor(),
        }
    }
}

impl Config {
    /// Load config from base directory; defaults when the file is absent
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| DocdexError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self).map_err(|e| DocdexError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with the default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Render the resolved configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| DocdexError::ConfigParse {
            path: PathBuf::from(CONFIG_FILE),
            message: e.to_string(),
        })
    }

    /// Build the classifier these settings describe
    pub fn classifier(&self) -> KeywordClassifier {
        if self.rules.is_empty() {
            KeywordClassifier::builtin()
        } else {
            KeywordClassifier::new(self.rules.clone())
        }
    }

    /// True when `path` carries one of the configured extensions
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                self.scan
                    .extensions
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}
