#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("failed to parse JSON schema {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("mapping file {path} is missing required column {column:?}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("mapping file {path} row {row}: invalid release type {value:?}")]
    InvalidReleaseType {
        path: PathBuf,
        row: usize,
        value: String,
    },

    #[error("mapping file {path}: duplicate {what} for release type {release_type}")]
    Duplicate {
        path: PathBuf,
        what: String,
        release_type: String,
    },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
