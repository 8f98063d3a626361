use std::path::PathBuf;

/// Errors from document storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error on a specific file or directory.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file does not contain valid JSON.
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A document could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The merged document does not exist.
    #[error("merged document not found: {0}")]
    MergedNotFound(PathBuf),

    /// No `<lang>.json` files were found.
    #[error("no language files found in {0}")]
    NoLanguageFiles(PathBuf),

    /// A document's `skills` list cannot be sorted.
    #[error("cannot sort skills of '{language}': {reason}")]
    MalformedSkills { language: String, reason: String },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
