use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("language code must not be empty")]
    EmptyLangCode,

    #[error("invalid language code {code:?}: {reason}")]
    InvalidLangCode { code: String, reason: String },
}
