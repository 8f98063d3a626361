use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File name of the merged document.
pub const DEFAULT_MERGED_FILE: &str = "resume.json";

/// Schema file looked up in the document directory when none is configured.
pub const DEFAULT_SCHEMA_FILE: &str = "schema.json";

/// Layout and formatting of a document directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// File name of the merged document inside the directory.
    pub merged_file: String,
    /// Spaces per indentation level in written files.
    pub indent: usize,
    /// Schema used to validate language files. Relative paths resolve
    /// against the document directory.
    pub schema: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            merged_file: DEFAULT_MERGED_FILE.into(),
            indent: 4,
            schema: None,
        }
    }
}
