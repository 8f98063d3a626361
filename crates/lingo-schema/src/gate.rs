use serde_json::Value;
use tracing::{debug, info, warn};

use lingo_types::LangMap;

use crate::error::{SchemaError, SchemaResult};
use crate::validator::{DocumentValidator, JsonSchemaValidator};

// ---------------------------------------------------------------------------
// SchemaGate
// ---------------------------------------------------------------------------

/// The gate every per-language document passes before it is merged.
///
/// Validators run in the order they were added. The gate is **fail-fast**:
/// the first validator reporting violations rejects the document and the
/// remaining ones are skipped. A gate with no validators is permissive.
#[derive(Default)]
pub struct SchemaGate {
    validators: Vec<Box<dyn DocumentValidator>>,
}

impl SchemaGate {
    /// A gate with an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// A gate that accepts every document.
    pub fn permissive() -> Self {
        Self::new()
    }

    /// A gate checking documents against one JSON Schema.
    pub fn with_schema(schema: JsonSchemaValidator) -> Self {
        let mut gate = Self::new();
        gate.add_validator(Box::new(schema));
        gate
    }

    /// A gate checking documents against the bundled JSON Resume schema.
    pub fn json_resume() -> SchemaResult<Self> {
        Ok(Self::with_schema(JsonSchemaValidator::json_resume()?))
    }

    /// Append a validator to the end of the pipeline.
    pub fn add_validator(&mut self, validator: Box<dyn DocumentValidator>) {
        self.validators.push(validator);
    }

    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    pub fn is_permissive(&self) -> bool {
        self.validators.is_empty()
    }

    /// Check one document. `name` only labels logs and errors.
    pub fn check(&self, name: &str, document: &Value) -> SchemaResult<()> {
        for validator in &self.validators {
            let violations = validator.validate(document);
            debug!(
                document = name,
                validator = validator.name(),
                violations = violations.len(),
                "validator ran"
            );
            if !violations.is_empty() {
                for violation in &violations {
                    warn!(document = name, %violation, "schema violation");
                }
                return Err(SchemaError::Invalid {
                    document: name.to_string(),
                    violations,
                });
            }
        }
        if !self.is_permissive() {
            info!(document = name, "document is valid");
        }
        Ok(())
    }

    /// Check every language variant, stopping at the first rejection.
    pub fn check_all(&self, langs: &LangMap) -> SchemaResult<()> {
        for (lang, document) in langs {
            self.check(lang.as_str(), document)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for SchemaGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.validators.iter().map(|v| v.name()).collect();
        f.debug_struct("SchemaGate").field("validators", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{AcceptAll, Violation};
    use lingo_types::LangCode;
    use serde_json::json;

    /// Rejects documents lacking a top-level `basics` object.
    struct RequireBasics;

    impl DocumentValidator for RequireBasics {
        fn name(&self) -> &str {
            "require-basics"
        }

        fn validate(&self, document: &Value) -> Vec<Violation> {
            match document.get("basics") {
                Some(Value::Object(_)) => Vec::new(),
                _ => vec![Violation::new("/basics", "basics must be an object")],
            }
        }
    }

    /// Counts how often it runs.
    struct Counting(std::sync::atomic::AtomicUsize);

    impl DocumentValidator for Counting {
        fn name(&self) -> &str {
            "counting"
        }

        fn validate(&self, _document: &Value) -> Vec<Violation> {
            self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Vec::new()
        }
    }

    fn langs(entries: &[(&str, Value)]) -> LangMap {
        entries
            .iter()
            .map(|(code, value)| (LangCode::new(*code).unwrap(), value.clone()))
            .collect()
    }

    #[test]
    fn permissive_gate_accepts() {
        let gate = SchemaGate::permissive();
        assert!(gate.is_permissive());
        assert!(gate.check("en", &json!(42)).is_ok());
    }

    #[test]
    fn rejection_names_the_document() {
        let mut gate = SchemaGate::new();
        gate.add_validator(Box::new(RequireBasics));
        let err = gate.check("fr", &json!({})).unwrap_err();
        assert!(err.is_rejection());
        match err {
            SchemaError::Invalid { document, violations } => {
                assert_eq!(document, "fr");
                assert_eq!(violations.len(), 1);
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn fail_fast_skips_later_validators() {
        let counter = std::sync::Arc::new(Counting(Default::default()));
        struct Shared(std::sync::Arc<Counting>);
        impl DocumentValidator for Shared {
            fn name(&self) -> &str {
                self.0.name()
            }
            fn validate(&self, document: &Value) -> Vec<Violation> {
                self.0.validate(document)
            }
        }

        let mut gate = SchemaGate::new();
        gate.add_validator(Box::new(RequireBasics));
        gate.add_validator(Box::new(Shared(counter.clone())));
        assert_eq!(gate.validator_count(), 2);

        assert!(gate.check("en", &json!({})).is_err());
        assert_eq!(counter.0.load(std::sync::atomic::Ordering::SeqCst), 0);

        assert!(gate.check("en", &json!({"basics": {}})).is_ok());
        assert_eq!(counter.0.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[test]
    fn json_resume_gate_rejects_an_invalid_resume() {
        let gate = SchemaGate::json_resume().unwrap();
        assert_eq!(gate.validator_count(), 1);
        assert!(gate.check("en", &json!({"basics": {"name": "John"}})).is_ok());
        let err = gate.check("en", &json!({"basics": {"name": ["John"]}})).unwrap_err();
        assert!(err.is_rejection());
    }

    #[test]
    fn check_all_stops_at_first_invalid_language() {
        let mut gate = SchemaGate::new();
        gate.add_validator(Box::new(RequireBasics));
        let input = langs(&[
            ("de", json!({"basics": {}})),
            ("en", json!({"basics": 1})),
            ("fr", json!({})),
        ]);
        match gate.check_all(&input).unwrap_err() {
            SchemaError::Invalid { document, .. } => assert_eq!(document, "en"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn json_schema_gate() {
        let schema = JsonSchemaValidator::from_value(&json!({"type": "object"})).unwrap();
        let mut gate = SchemaGate::with_schema(schema);
        gate.add_validator(Box::new(AcceptAll));
        assert!(gate.check_all(&langs(&[("en", json!({})), ("fr", json!({}))])).is_ok());
        assert!(gate.check("en", &json!([])).is_err());
    }

    #[test]
    fn debug_lists_validator_names() {
        let mut gate = SchemaGate::new();
        gate.add_validator(Box::new(AcceptAll));
        assert_eq!(format!("{gate:?}"), r#"SchemaGate { validators: ["accept-all"] }"#);
    }
}
