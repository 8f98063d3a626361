//! Node shape classification.
//!
//! Merging only distinguishes three shapes: objects, arrays, and everything
//! else. Strings, numbers, booleans and null are all scalars and are compared
//! by value, never by their JSON type.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The shape of a JSON node as seen by the merge algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
    /// A mapping of string keys to values.
    Object,
    /// An ordered sequence of values.
    Array,
    /// A string, number, boolean, or null.
    Scalar,
}

impl JsonKind {
    /// Classify a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Self::Scalar,
        }
    }

    /// Stable lowercase name, as used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::Scalar => "scalar",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
