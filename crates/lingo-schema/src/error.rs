use std::path::PathBuf;

use crate::validator::Violation;

/// Errors raised by the schema gate.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A document failed validation.
    #[error("invalid document '{document}': {}", summarize(.violations))]
    Invalid {
        document: String,
        violations: Vec<Violation>,
    },

    /// The schema itself could not be compiled.
    #[error("unusable schema: {0}")]
    Compile(String),

    /// The schema file could not be read.
    #[error("cannot read schema {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema file is not valid JSON.
    #[error("cannot parse schema {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SchemaError {
    /// Returns `true` if a document was rejected, as opposed to the schema
    /// being unusable.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }
}

fn summarize(violations: &[Violation]) -> String {
    match violations {
        [] => "rejected".into(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more)", rest.len()),
    }
}

/// Convenience alias for schema results.
pub type SchemaResult<T> = Result<T, SchemaError>;
