use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocdexError {
    #[error("Articles directory not found: {path}")]
    ArticlesDirNotFound { path: PathBuf },

    #[error("README not found: {path}")]
    ReadmeNotFound { path: PathBuf },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("{count} file(s) with invalid frontmatter")]
    ValidationFailed { count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DocdexError>;

impl DocdexError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ArticlesDirNotFound { .. } => 2,
            Self::ReadmeNotFound { .. } => 3,
            Self::ConfigParse { .. } => 5,
            _ => 1,
        }
    }
}
