use std::path::PathBuf;

/// Alias for `Result<T, ContentError>`.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors that can occur while loading flashcard content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The content file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The content was not a valid flashcard deck.
    #[error("invalid flashcard data: {0}")]
    Parse(#[from] serde_json::Error),
}
