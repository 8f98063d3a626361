//! Error types for the merge crate.

use lingo_types::{JsonKind, LangCode, NodePath};

/// Errors that can occur while merging or unmerging documents.
///
/// Every error is fatal to the whole operation: neither direction ever
/// produces a partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// Merge was called without any language variant.
    #[error("no language variants to merge")]
    NoLanguages,

    /// Variants disagree on the shape of a node.
    #[error("type mismatch at {path}: {}", describe(.kinds))]
    TypeMismatch {
        path: NodePath,
        kinds: Vec<(LangCode, JsonKind)>,
    },

    /// Variants disagree on the length of an array.
    #[error("length mismatch at {path}: {}", describe(.lengths))]
    LengthMismatch {
        path: NodePath,
        lengths: Vec<(LangCode, usize)>,
    },

    /// The merged document does not declare which languages it holds.
    #[error("could not find meta.lang or it is empty")]
    MissingLanguages,

    /// An entry of `meta.lang` is not a usable language code.
    #[error("invalid language under meta.lang.{label}: {reason}")]
    InvalidLanguage { label: String, reason: String },

    /// A divergence marker has no value for a requested language.
    #[error("divergence marker at {path} has no entry for language {language}")]
    MissingVariant { path: NodePath, language: LangCode },

    /// The document nests deeper than the configured limit.
    #[error("document exceeds maximum depth {max_depth} at {path}")]
    DepthExceeded { path: NodePath, max_depth: usize },
}

impl MergeError {
    /// The tree location the error refers to, when it has one.
    pub fn path(&self) -> Option<&NodePath> {
        match self {
            Self::TypeMismatch { path, .. }
            | Self::LengthMismatch { path, .. }
            | Self::MissingVariant { path, .. }
            | Self::DepthExceeded { path, .. } => Some(path),
            Self::NoLanguages | Self::MissingLanguages | Self::InvalidLanguage { .. } => None,
        }
    }
}

fn describe<T: std::fmt::Display>(pairs: &[(LangCode, T)]) -> String {
    pairs
        .iter()
        .map(|(lang, v)| format!("{lang}={v}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
