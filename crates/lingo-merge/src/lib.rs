//! Merge engine for Lingo.
//!
//! [`TreeMerger`] folds a [`LangMap`](lingo_types::LangMap) of per-language
//! documents into one document, replacing every scalar the languages
//! disagree on with a divergence marker (`{"@en": ..., "@fr": ...}`).
//! [`TreeUnmerger`] reverses it for an explicit list of languages, usually
//! read from the document's `meta.lang` with [`read_languages`].
//!
//! Both directions are pure: they borrow their input, return a fresh tree,
//! and either succeed completely or fail with a [`MergeError`] naming the
//! offending node.
//!
//! ```
//! use lingo_merge::{merge, unmerge};
//! use lingo_types::{LangCode, LangMap};
//! use serde_json::json;
//!
//! let en = LangCode::new("en").unwrap();
//! let fr = LangCode::new("fr").unwrap();
//! let mut langs = LangMap::new();
//! langs.insert(en.clone(), json!({"name": "John", "skills": ["a", "b"]}));
//! langs.insert(fr.clone(), json!({"name": "Jean", "skills": ["a", "b"]}));
//!
//! let merged = merge(&langs).unwrap();
//! assert_eq!(merged, json!({"name": {"@en": "John", "@fr": "Jean"}, "skills": ["a", "b"]}));
//! assert_eq!(unmerge(&merged, &[en, fr]).unwrap(), langs);
//! ```

pub mod config;
pub mod error;
pub mod merge;
pub mod meta;
pub mod unmerge;

#[cfg(test)]
mod proptests;

pub use config::{MergeConfig, DEFAULT_MAX_DEPTH};
pub use error::{MergeError, MergeResult};
pub use merge::{merge, MergeOutcome, MergeReport, TreeMerger};
pub use meta::read_languages;
pub use unmerge::{unmerge, TreeUnmerger};
