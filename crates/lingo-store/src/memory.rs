use std::path::PathBuf;
use std::sync::RwLock;

use serde_json::Value;

use lingo_types::LangMap;

use crate::config::DEFAULT_MERGED_FILE;
use crate::error::{StoreError, StoreResult};
use crate::traits::{DocumentSource, OutputSink};

/// In-memory document store.
///
/// Intended for tests and embedding. Documents are held behind `RwLock`s and
/// cloned on every read and write.
pub struct InMemoryDocumentStore {
    languages: RwLock<LangMap>,
    merged: RwLock<Option<Value>>,
}

impl InMemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            languages: RwLock::new(LangMap::new()),
            merged: RwLock::new(None),
        }
    }

    /// Create a store pre-populated with per-language documents.
    pub fn with_languages(languages: LangMap) -> Self {
        Self {
            languages: RwLock::new(languages),
            merged: RwLock::new(None),
        }
    }

    /// Create a store pre-populated with a merged document.
    pub fn with_merged(merged: Value) -> Self {
        Self {
            languages: RwLock::new(LangMap::new()),
            merged: RwLock::new(Some(merged)),
        }
    }

    /// Snapshot of the per-language documents.
    pub fn languages(&self) -> LangMap {
        self.languages.read().expect("lock poisoned").clone()
    }

    /// Snapshot of the merged document.
    pub fn merged(&self) -> Option<Value> {
        self.merged.read().expect("lock poisoned").clone()
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSource for InMemoryDocumentStore {
    fn load_languages(&self) -> StoreResult<LangMap> {
        let languages = self.languages.read().expect("lock poisoned");
        if languages.is_empty() {
            return Err(StoreError::NoLanguageFiles(PathBuf::from("<memory>")));
        }
        Ok(languages.clone())
    }

    fn load_merged(&self) -> StoreResult<Value> {
        self.merged
            .read()
            .expect("lock poisoned")
            .clone()
            .ok_or_else(|| StoreError::MergedNotFound(PathBuf::from(DEFAULT_MERGED_FILE)))
    }
}

impl OutputSink for InMemoryDocumentStore {
    fn write_languages(&self, documents: &LangMap) -> StoreResult<()> {
        let mut languages = self.languages.write().expect("lock poisoned");
        for (lang, document) in documents {
            languages.insert(lang.clone(), document.clone());
        }
        Ok(())
    }

    fn write_merged(&self, document: &Value) -> StoreResult<()> {
        *self.merged.write().expect("lock poisoned") = Some(document.clone());
        Ok(())
    }
}
