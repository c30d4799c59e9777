use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a lexicon run.
#[derive(Debug, Error)]
pub enum LexiqueError {
    #[error("cannot read '{}': {reason}", .path.display())]
    FileAccess { path: PathBuf, reason: String },
    #[error("cannot write '{}': {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("row {row} has {width} column(s) but the word column is index {column}")]
    DataShape { row: usize, width: usize, column: usize },
    #[error("lexicon '{}' is malformed: {reason}", .path.display())]
    InvalidLexicon { path: PathBuf, reason: String },
}

impl LexiqueError {
    pub fn file_access(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        LexiqueError::FileAccess {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LexiqueError::FileWrite {
            path: path.into(),
            source,
        }
    }
}

pub type LexiqueResult<T> = Result<T, LexiqueError>;
