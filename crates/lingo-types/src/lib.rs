//! Foundation types for Lingo.
//!
//! Lingo reconciles per-language variants of a JSON document (typically a
//! résumé) into one merged document, and splits a merged document back into
//! its variants. This crate holds the vocabulary shared by every other Lingo
//! crate.
//!
//! # Key Types
//!
//! - [`LangCode`]: Opaque, non-empty language identifier (`en`, `pt-BR`, ...)
//! - [`LangMap`]: Ordered mapping from language code to document tree
//! - [`JsonKind`]: The three node shapes that must agree across variants
//! - [`NodePath`]: Location of a node inside a document, used in errors
//! - [`marker`]: Encoding and detection of divergence markers (`"@en"` keys)

pub mod error;
pub mod kind;
pub mod lang;
pub mod marker;
pub mod path;

pub use error::TypeError;
pub use kind::JsonKind;
pub use lang::{LangCode, LangMap};
pub use marker::{is_marker_key, is_marker_object, marker_key, marker_lang, MARKER_PREFIX};
pub use path::{NodePath, PathSegment};
