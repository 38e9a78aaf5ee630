//! Error types for external engine invocation and extraction.

use thiserror::Error;

/// Errors that can occur while dumping a database.
#[derive(Debug, Error)]
pub enum DumpError {
    /// The external engine subprocess could not be started.
    #[error("failed to launch external engine '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An introspection line did not have the expected field count.
    #[error("malformed schema line for table '{table}': {line:?}")]
    MalformedOutput { table: String, line: String },

    /// JSON emission failure.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Output file could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results with [`DumpError`].
pub type Result<T> = std::result::Result<T, DumpError>;
