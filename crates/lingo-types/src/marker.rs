//! Divergence markers.
//!
//! Where language variants disagree on a scalar, the merged document holds an
//! object keyed by `"@" + language`:
//!
//! ```json
//! { "name": { "@en": "John", "@fr": "Jean" } }
//! ```
//!
//! Detection does not assume a code width. A key has the marker shape when it
//! is the prefix followed by at least one character, but only the languages a
//! document is known to hold turn an object into a marker: `{"@type": ..}` is
//! ordinary data in a document merged from `en` and `fr`.

use serde_json::{Map, Value};

use crate::lang::LangCode;

/// Prefix that turns a language code into a marker key.
pub const MARKER_PREFIX: char = '@';

/// The marker key for a language.
///
/// ```
/// use lingo_types::{marker_key, LangCode};
///
/// let en = LangCode::new("en").unwrap();
/// assert_eq!(marker_key(&en), "@en");
/// ```
pub fn marker_key(lang: &LangCode) -> String {
    let mut key = String::with_capacity(lang.as_str().len() + 1);
    key.push(MARKER_PREFIX);
    key.push_str(lang.as_str());
    key
}

/// The language code carried by a marker key, if it is one.
pub fn marker_lang(key: &str) -> Option<&str> {
    key.strip_prefix(MARKER_PREFIX).filter(|code| !code.is_empty())
}

/// Whether a key has the marker shape.
pub fn is_marker_key(key: &str) -> bool {
    marker_lang(key).is_some()
}

/// Whether an object is a divergence marker for the given languages: it is
/// non-empty and every key is `"@" + code` for one of `known`.
///
/// The empty object is never a marker: merge only creates markers with at
/// least two entries.
pub fn is_marker_object(map: &Map<String, Value>, known: &[LangCode]) -> bool {
    !map.is_empty()
        && map.keys().all(|key| {
            marker_lang(key).is_some_and(|code| known.iter().any(|lang| lang.as_str() == code))
        })
}
