//! Pretty-printed JSON output.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::error::StoreResult;

/// Render a document with `indent` spaces per level and a trailing newline.
pub fn to_pretty_bytes(document: &Value, indent: usize) -> StoreResult<Vec<u8>> {
    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    document.serialize(&mut serializer)?;
    out.push(b'\n');
    Ok(out)
}
