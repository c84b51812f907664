//! Line-oriented frontmatter parser.
//!
//! A frontmatter block is delimited by lines containing only `---`, the
//! first of which must be the first line of the document. Parsing runs a
//! small state machine over the lines (before-open, in-block, closed) so
//! that unterminated blocks and `\r\n` endings behave deterministically:
//! an unterminated opener is treated as "no frontmatter", never an error.

const DELIMITER: &str = "---";

/// A parsed frontmatter block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    /// `key: value` lines in document order
    pub fields: Vec<(String, String)>,
    /// Byte offset of the first line after the closing delimiter
    pub body_offset: usize,
}

impl Frontmatter {
    /// Look up a field value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The document content after the frontmatter block.
    pub fn body<'a>(&self, content: &'a str) -> &'a str {
        &content[self.body_offset..]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    BeforeOpen,
    InBlock,
}

/// Parse a frontmatter block from the start of `content`.
///
/// Returns `None` when the document does not start with `---` or the block
/// is never closed.
pub fn parse(content: &str) -> Option<Frontmatter> {
    let mut state = State::BeforeOpen;
    let mut fields = Vec::new();
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let text = line.trim_end_matches('\n').trim_end_matches('\r');
        offset += line.len();

        match state {
            State::BeforeOpen => {
                if text != DELIMITER {
                    return None;
                }
                state = State::InBlock;
            }
            State::InBlock => {
                if text == DELIMITER {
                    return Some(Frontmatter {
                        fields,
                        body_offset: offset,
                    });
                }
                if let Some((key, value)) = text.split_once(':') {
                    fields.push((key.trim().to_string(), strip_quotes(value).to_string()));
                }
            }
        }
    }

    // Opener without a closing delimiter
    None
}

/// Structural validation verdict for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Document does not begin with a delimiter line
    NoFrontmatter,
    /// Block opened and closed
    Valid,
    /// Block opened but never closed
    Unterminated,
}

/// Result of validating a document's frontmatter structure.
#[derive(Debug, Clone)]
pub struct Validation {
    pub status: ValidationStatus,
    /// Suspicious lines inside an otherwise valid block
    pub warnings: Vec<String>,
}

/// Validate the frontmatter structure of a document.
///
/// Valid blocks may still carry warnings for lines that are neither
/// `key: value`, a comment, a list item, nor an indented continuation.
pub fn validate(content: &str) -> Validation {
    let mut state = State::BeforeOpen;
    let mut warnings = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let text = line.trim_end_matches('\r');

        match state {
            State::BeforeOpen => {
                if text != DELIMITER {
                    return Validation {
                        status: ValidationStatus::NoFrontmatter,
                        warnings,
                    };
                }
                state = State::InBlock;
            }
            State::InBlock => {
                if text == DELIMITER {
                    return Validation {
                        status: ValidationStatus::Valid,
                        warnings,
                    };
                }
                if !is_plausible_yaml_line(text) {
                    warnings.push(format!("line {}: not a key/value pair: {}", index + 1, text));
                }
            }
        }
    }

    let status = match state {
        State::BeforeOpen => ValidationStatus::NoFrontmatter,
        State::InBlock => ValidationStatus::Unterminated,
    };
    Validation { status, warnings }
}

fn is_plausible_yaml_line(text: &str) -> bool {
    if text.trim().is_empty() {
        return true;
    }
    if text.starts_with(' ') || text.starts_with('\t') {
        return true;
    }
    let trimmed = text.trim_start();
    if trimmed.starts_with('#') || trimmed.starts_with("- ") {
        return true;
    }
    text.split_once(':').is_some()
}

/// Trim a value and strip one layer of surrounding quotes from each end.
fn strip_quotes(value: &str) -> &str {
    let v = value.trim();
    let v = v
        .strip_prefix('"')
        .or_else(|| v.strip_prefix('\''))
        .unwrap_or(v);
    v.strip_suffix('"')
        .or_else(|| v.strip_suffix('\''))
        .unwrap_or(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_block() {
        let content = "---\ntitle: Setup Guide\nsubtitle: How to set up\n---\nBody text\n";
        let fm = parse(content).unwrap();
        assert_eq!(fm.get("title"), Some("Setup Guide"));
        assert_eq!(fm.get("subtitle"), Some("How to set up"));
        assert_eq!(fm.body(content), "Body text\n");
    }

    #[test]
    fn test_parse_quoted_values() {
        let content = "---\ntitle: \"Quoted Title\"\ncategory: 'Other'\n---\n";
        let fm = parse(content).unwrap();
        assert_eq!(fm.get("title"), Some("Quoted Title"));
        assert_eq!(fm.get("category"), Some("Other"));
    }

    #[test]
    fn test_parse_crlf_line_endings() {
        let content = "---\r\ntitle: Windows Doc\r\n---\r\nBody\r\n";
        let fm = parse(content).unwrap();
        assert_eq!(fm.get("title"), Some("Windows Doc"));
        assert_eq!(fm.body(content), "Body\r\n");
    }

    #[test]
    fn test_parse_unterminated_is_none() {
        let content = "---\ntitle: Never Closed\nBody keeps going\n";
        assert!(parse(content).is_none());
    }

    #[test]
    fn test_parse_not_at_start_is_none() {
        let content = "# Heading\n---\ntitle: Late\n---\n";
        assert!(parse(content).is_none());
    }

    #[test]
    fn test_parse_missing_field_is_unset() {
        let content = "---\ntitle: Only Title\n---\n";
        let fm = parse(content).unwrap();
        assert_eq!(fm.get("subtitle"), None);
    }

    #[test]
    fn test_parse_closing_delimiter_at_eof_without_newline() {
        let content = "---\ntitle: Tight\n---";
        let fm = parse(content).unwrap();
        assert_eq!(fm.get("title"), Some("Tight"));
        assert_eq!(fm.body(content), "");
    }

    #[test]
    fn test_parse_empty_document() {
        assert!(parse("").is_none());
    }

    #[test]
    fn test_validate_statuses() {
        assert_eq!(
            validate("# No block\n").status,
            ValidationStatus::NoFrontmatter
        );
        assert_eq!(
            validate("---\ntitle: X\n---\n").status,
            ValidationStatus::Valid
        );
        assert_eq!(
            validate("---\ntitle: X\n").status,
            ValidationStatus::Unterminated
        );
    }

    #[test]
    fn test_validate_warns_on_stray_line() {
        let result = validate("---\ntitle: X\nthis is not yaml\n---\n");
        assert_eq!(result.status, ValidationStatus::Valid);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("line 3"));
    }

    #[test]
    fn test_validate_accepts_lists_and_continuations() {
        let result = validate("---\ntags:\n  - rust\n  - docs\n# comment\n---\n");
        assert_eq!(result.status, ValidationStatus::Valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_strip_quotes_mismatched() {
        assert_eq!(strip_quotes(" \"half"), "half");
        assert_eq!(strip_quotes("plain "), "plain");
    }
}
