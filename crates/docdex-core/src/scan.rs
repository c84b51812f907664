//! Directory scanning.
//!
//! Lists the article directory (one level, no recursion), reads each
//! matching file, and runs extraction. A file that cannot be read is
//! recorded as skipped and the scan continues; only a missing directory
//! is fatal.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::article::Article;
use crate::config::Config;
use crate::error::{DocdexError, Result};
use crate::extract::Extractor;

/// A file excluded from the scan, with the reason.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub message: String,
}

/// Everything one scan produced.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub articles: Vec<Article>,
    pub skipped: Vec<SkippedFile>,
}

/// Scan `dir` for articles using the extensions and rules in `config`.
pub fn scan_articles(dir: &Path, config: &Config) -> Result<ScanOutcome> {
    if !dir.is_dir() {
        return Err(DocdexError::ArticlesDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let extractor = Extractor::new(config.classifier());
    let mut outcome = ScanOutcome::default();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            // Entries the walker cannot stat or list still get a ledger line
            Err(e) => {
                outcome.skipped.push(SkippedFile {
                    path: e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| dir.to_path_buf()),
                    message: e.to_string(),
                });
                continue;
            }
        };

        if !entry.file_type().is_file() || !config.matches_extension(entry.path()) {
            continue;
        }

        match fs::read_to_string(entry.path()) {
            Ok(content) => outcome.articles.push(extractor.extract(entry.path(), &content)),
            Err(e) => outcome.skipped.push(SkippedFile {
                path: entry.path().to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    Ok(outcome)
}
