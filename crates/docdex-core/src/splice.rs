//! README section splicing.
//!
//! Replaces the body of the `## Documentation` section in a target file,
//! inserting or appending the section when no heading exists yet. The
//! rewrite is shaped so that running it again over its own output is a
//! no-op.

use std::fs;
use std::path::Path;

use crate::error::{DocdexError, Result};
use crate::render::SECTION_HEADING;

/// When no section exists, it is inserted before this heading.
const INSERT_ANCHOR: &str = "## Adding New Articles";

/// Splice `section` (already trimmed, no trailing newline) into `readme`.
pub fn splice_section(readme: &str, section: &str) -> String {
    let heading_start = find_line(readme, |text| text.trim() == SECTION_HEADING);

    if let Some(start) = heading_start {
        // End of the span: the next `## ` heading, or EOF. The predicate
        // rejects the Documentation heading itself, so searching from
        // `start` cannot match our own line.
        let boundary = find_line_from(readme, start, |text| {
            text.starts_with("## ") && text.trim() != SECTION_HEADING
        });
        return match boundary {
            Some(end) => format!("{}{}\n\n{}", &readme[..start], section, &readme[end..]),
            None => format!("{}{}\n", &readme[..start], section),
        };
    }

    if let Some(anchor) = find_line(readme, |text| text.starts_with(INSERT_ANCHOR)) {
        return format!("{}{}\n\n{}", &readme[..anchor], section, &readme[anchor..]);
    }

    format!("{}\n\n{}\n", readme, section)
}

/// Read, splice, and rewrite the target file.
pub fn update_readme(path: &Path, section: &str) -> Result<()> {
    if !path.is_file() {
        return Err(DocdexError::ReadmeNotFound {
            path: path.to_path_buf(),
        });
    }

    let readme = fs::read_to_string(path)?;
    let updated = splice_section(&readme, section);
    fs::write(path, updated)?;
    Ok(())
}

/// Byte offset of the first line matching `pred`.
fn find_line(text: &str, pred: impl Fn(&str) -> bool) -> Option<usize> {
    find_line_from(text, 0, pred)
}

/// Byte offset of the first line starting at or after `from` that
/// matches `pred`.
fn find_line_from(text: &str, from: usize, pred: impl Fn(&str) -> bool) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        if start < from {
            continue;
        }
        let line = line.trim_end_matches('\n').trim_end_matches('\r');
        if pred(line) {
            return Some(start);
        }
    }
    None
}
