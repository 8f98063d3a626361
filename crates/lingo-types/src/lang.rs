//! Language codes and per-language document maps.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TypeError;

/// An opaque language identifier.
///
/// Conventionally a two-letter code such as `en`, but nothing in Lingo
/// assumes a fixed width: `pt-BR` or `zh_Hant` are equally valid. The only
/// requirements are that the code is non-empty and contains no whitespace or
/// control characters, so it can be embedded in a marker key and a file name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LangCode(String);

impl LangCode {
    /// Create a language code, validating its characters.
    pub fn new(code: impl Into<String>) -> Result<Self, TypeError> {
        let code = code.into();
        if code.is_empty() {
            return Err(TypeError::EmptyLangCode);
        }
        if let Some(ch) = code.chars().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(TypeError::InvalidLangCode {
                reason: format!("contains forbidden character {ch:?}"),
                code,
            });
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LangCode {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LangCode {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for LangCode {
    type Error = TypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LangCode> for String {
    fn from(code: LangCode) -> Self {
        code.0
    }
}

impl AsRef<str> for LangCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LangCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Mapping from language code to that language's document tree.
///
/// Ordered by code so that anything iterating it (merge output, marker
/// entries, file writes) is deterministic.
pub type LangMap = BTreeMap<LangCode, Value>;
