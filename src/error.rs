//! Error types for the rugby roster manager

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error reading file {path}: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid record id {value:?} on line {line}")]
    InvalidRecordId { line: usize, value: String },

    #[error("Player references unknown {entity} #{index}")]
    DanglingReference { entity: &'static str, index: usize },

    #[error("Invalid choice: {input:?}")]
    InvalidChoice { input: String },

    #[error("Log setup failed: {message}")]
    LogSetup { message: String },
}

impl RosterError {
    /// Wrap an IO failure on a named record source.
    pub fn source_unavailable(path: impl Into<String>, source: std::io::Error) -> Self {
        RosterError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}
