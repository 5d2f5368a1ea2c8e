use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::persist::PersistError;

#[derive(Debug, Error)]
pub enum FillError {
    #[error("cannot read word bank {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        source: io::Error,
    },
    #[error("word bank {path:?} is not a list of {{word, category}} records: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("entry {index} in {path:?} has an empty `{field}` field")]
    EmptyField {
        path: PathBuf,
        index: usize,
        field: &'static str,
    },
    #[error("cannot write suggestion file: {0}")]
    Persist(#[from] PersistError),
    #[error("cannot serialize suggestion file: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl FillError {
    /// Missing or unreadable input, or an unwritable output location.
    pub fn is_file_access(&self) -> bool {
        matches!(self, FillError::FileAccess { .. } | FillError::Persist(_))
    }

    /// Input that is readable but not shaped like a word bank.
    pub fn is_parse(&self) -> bool {
        matches!(self, FillError::Parse { .. } | FillError::EmptyField { .. })
    }
}
