use serde_json::Value;

use lingo_types::LangMap;

use crate::error::StoreResult;

/// Where documents come from.
///
/// Implementations return fully parsed trees; the merge engine never touches
/// files itself.
pub trait DocumentSource: Send + Sync {
    /// Every per-language document, keyed by language.
    ///
    /// Returns an error rather than an empty map when there are none.
    fn load_languages(&self) -> StoreResult<LangMap>;

    /// The merged document.
    fn load_merged(&self) -> StoreResult<Value>;
}

/// Where documents go.
///
/// Writing replaces any existing document of the same name.
pub trait OutputSink: Send + Sync {
    /// Write one document per language.
    ///
    /// Implementations should write all documents or none; the directory
    /// backend narrows the failure window by staging every file first.
    fn write_languages(&self, documents: &LangMap) -> StoreResult<()>;

    /// Write the merged document.
    fn write_merged(&self, document: &Value) -> StoreResult<()>;
}
