//! Document validators.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SchemaError, SchemaResult};

/// The JSON Resume schema (v1.0.0), used when no other schema is configured.
pub const JSON_RESUME_SCHEMA: &str = include_str!("../schema/resume.json");

/// A single reason a document was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// JSON pointer to the offending value (`/` for the root).
    pub pointer: String,
    pub message: String,
}

impl Violation {
    pub fn new(pointer: impl Into<String>, message: impl Into<String>) -> Self {
        let pointer = pointer.into();
        Self {
            pointer: if pointer.is_empty() { "/".into() } else { pointer },
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pointer, self.message)
    }
}

/// Something that accepts or rejects a whole document.
///
/// Object-safe and `Send + Sync` so validators can be stacked in a
/// `Vec<Box<dyn DocumentValidator>>`.
pub trait DocumentValidator: Send + Sync {
    /// Human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Every violation found; empty means the document is accepted.
    fn validate(&self, document: &Value) -> Vec<Violation>;
}

/// Validator that accepts everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl DocumentValidator for AcceptAll {
    fn name(&self) -> &str {
        "accept-all"
    }

    fn validate(&self, _document: &Value) -> Vec<Violation> {
        Vec::new()
    }
}

/// Validator backed by a compiled JSON Schema.
pub struct JsonSchemaValidator {
    compiled: jsonschema::Validator,
}

impl JsonSchemaValidator {
    /// Compile a schema.
    pub fn from_value(schema: &Value) -> SchemaResult<Self> {
        let compiled =
            jsonschema::validator_for(schema).map_err(|e| SchemaError::Compile(e.to_string()))?;
        Ok(Self { compiled })
    }

    /// The bundled JSON Resume schema.
    pub fn json_resume() -> SchemaResult<Self> {
        let schema: Value = serde_json::from_str(JSON_RESUME_SCHEMA)
            .map_err(|e| SchemaError::Compile(format!("bundled schema: {e}")))?;
        Self::from_value(&schema)
    }

    /// Read and compile a schema file.
    pub fn from_file(path: &Path) -> SchemaResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let schema: Value = serde_json::from_str(&raw).map_err(|source| SchemaError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "schema loaded");
        Self::from_value(&schema)
    }
}

impl fmt::Debug for JsonSchemaValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSchemaValidator").finish_non_exhaustive()
    }
}

impl DocumentValidator for JsonSchemaValidator {
    fn name(&self) -> &str {
        "json-schema"
    }

    fn validate(&self, document: &Value) -> Vec<Violation> {
        self.compiled
            .iter_errors(document)
            .map(|error| Violation::new(error.instance_path.to_string(), error.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resume_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "basics": {
                    "type": "object",
                    "properties": {"name": {"type": "string"}}
                },
                "skills": {"type": "array"}
            },
            "required": ["basics"]
        })
    }

    #[test]
    fn accept_all_accepts_anything() {
        assert!(AcceptAll.validate(&json!(null)).is_empty());
        assert!(AcceptAll.validate(&json!({"x": [1]})).is_empty());
    }

    #[test]
    fn valid_document_has_no_violations() {
        let v = JsonSchemaValidator::from_value(&resume_schema()).unwrap();
        assert!(v.validate(&json!({"basics": {"name": "John"}, "skills": []})).is_empty());
    }

    #[test]
    fn invalid_document_reports_pointer() {
        let v = JsonSchemaValidator::from_value(&resume_schema()).unwrap();
        let violations = v.validate(&json!({"basics": {"name": 7}}));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].pointer, "/basics/name");
    }

    #[test]
    fn missing_required_field_points_at_root() {
        let v = JsonSchemaValidator::from_value(&resume_schema()).unwrap();
        let violations = v.validate(&json!({"skills": []}));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].pointer, "/");
    }

    #[test]
    fn broken_schema_fails_to_compile() {
        let err = JsonSchemaValidator::from_value(&json!({"type": 12})).unwrap_err();
        assert!(matches!(err, SchemaError::Compile(_)));
    }

    #[test]
    fn schema_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        std::fs::write(&path, resume_schema().to_string()).unwrap();
        let v = JsonSchemaValidator::from_file(&path).unwrap();
        assert_eq!(v.name(), "json-schema");
    }

    #[test]
    fn unreadable_schema_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonSchemaValidator::from_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SchemaError::Io { .. }));
    }

    #[test]
    fn malformed_schema_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = JsonSchemaValidator::from_file(&path).unwrap_err();
        assert!(matches!(err, SchemaError::Parse { .. }));
    }

    #[test]
    fn bundled_resume_schema_accepts_a_resume() {
        let v = JsonSchemaValidator::json_resume().unwrap();
        let resume = json!({
            "basics": {"name": "John", "label": "Developer", "location": {"city": "Lyon"}},
            "work": [{"name": "Acme", "position": "Dev", "startDate": "2020-01", "highlights": ["shipped"]}],
            "skills": [{"name": "Rust", "keywords": ["serde"]}],
            "meta": {"lang": {"english": "en", "french": "fr"}}
        });
        assert_eq!(v.validate(&resume), Vec::new());
    }

    #[test]
    fn bundled_resume_schema_rejects_unknown_sections() {
        let v = JsonSchemaValidator::json_resume().unwrap();
        assert!(!v.validate(&json!({"name": "John"})).is_empty());
    }

    #[test]
    fn bundled_resume_schema_checks_nested_types() {
        let v = JsonSchemaValidator::json_resume().unwrap();
        let violations = v.validate(&json!({"skills": ["Rust"]}));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].pointer, "/skills/0");

        let violations = v.validate(&json!({"work": [{"startDate": "last year"}]}));
        assert_eq!(violations[0].pointer, "/work/0/startDate");
    }

    #[test]
    fn violation_display() {
        assert_eq!(Violation::new("", "oops").to_string(), "/: oops");
        assert_eq!(Violation::new("/a/0", "bad").to_string(), "/a/0: bad");
    }
}
