use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WasteSortError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Error reading file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error saving CSV {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WasteSortError>;

impl WasteSortError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } => 2,
            Self::Read { .. } => 3,
            Self::Write { .. } => 4,
            Self::ConfigParse { .. } => 5,
            _ => 1,
        }
    }
}
