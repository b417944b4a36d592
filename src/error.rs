//! Query engine errors.

use std::path::PathBuf;

/// Errors surfaced by the query engine.
///
/// Usage errors (`InvalidRange`, `InvalidDuration`, `InvalidPattern`, `ConflictingRoles`) are
/// raised while building a query, before any transcript is opened.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid line range: {0} (expected START-END with START <= END)")]
    InvalidRange(String),

    #[error("Invalid duration: {0} (expected e.g. 7d, 2w, 1m)")]
    InvalidDuration(String),

    #[error("Invalid search pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Cannot use both --user-only and --assistant-only")]
    ConflictingRoles,

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("No transcripts directory: {}", .0.display())]
    MissingTranscriptDir(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl QueryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        QueryError::Io { path: path.into(), source }
    }

    /// True for errors caused by how the query was written rather than by the archive
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            QueryError::InvalidRange(_)
                | QueryError::InvalidDuration(_)
                | QueryError::InvalidPattern { .. }
                | QueryError::ConflictingRoles
        )
    }
}

pub type QueryResult<T> = Result<T, QueryError>;
