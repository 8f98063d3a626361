//! Schema gate for Lingo.
//!
//! Per-language documents are validated before they are merged or rewritten.
//! A [`SchemaGate`] runs a pipeline of [`DocumentValidator`]s over each
//! document and rejects it at the first validator that reports a
//! [`Violation`]. [`JsonSchemaValidator`] checks against a JSON Schema such as
//! the JSON Resume schema, which is bundled with the crate.

pub mod error;
pub mod gate;
pub mod validator;

pub use error::{SchemaError, SchemaResult};
pub use gate::SchemaGate;
pub use validator::{AcceptAll, DocumentValidator, JsonSchemaValidator, Violation, JSON_RESUME_SCHEMA};
