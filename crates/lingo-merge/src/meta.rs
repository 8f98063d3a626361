//! The `meta.lang` declaration of a merged document.
//!
//! ```json
//! { "meta": { "lang": { "english": "en", "french": "fr" } } }
//! ```
//!
//! Labels are free-form; only the values matter.

use serde_json::Value;

use lingo_types::{JsonKind, LangCode};

use crate::error::{MergeError, MergeResult};

/// Read the declared languages, in the order `meta.lang` lists them.
///
/// Codes listed under several labels are returned once.
pub fn read_languages(doc: &Value) -> MergeResult<Vec<LangCode>> {
    let declared = doc
        .get("meta")
        .and_then(|meta| meta.get("lang"))
        .and_then(Value::as_object)
        .filter(|lang| !lang.is_empty())
        .ok_or(MergeError::MissingLanguages)?;

    let mut languages = Vec::with_capacity(declared.len());
    for (label, value) in declared {
        let code = value.as_str().ok_or_else(|| MergeError::InvalidLanguage {
            label: label.clone(),
            reason: format!("expected a string, got {}", JsonKind::of(value)),
        })?;
        let lang = LangCode::new(code).map_err(|e| MergeError::InvalidLanguage {
            label: label.clone(),
            reason: e.to_string(),
        })?;
        if !languages.contains(&lang) {
            languages.push(lang);
        }
    }
    Ok(languages)
}
