use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use lingo_types::{LangCode, LangMap};

use crate::config::{StoreConfig, DEFAULT_SCHEMA_FILE};
use crate::error::{StoreError, StoreResult};
use crate::lang_file::{file_name, language_of};
use crate::sink::WriteBatch;
use crate::traits::{DocumentSource, OutputSink};

/// A directory holding `<lang>.json` files and the merged document.
#[derive(Clone, Debug)]
pub struct DirectoryStore {
    root: PathBuf,
    config: StoreConfig,
}

impl DirectoryStore {
    /// Open an existing directory.
    pub fn open(root: impl Into<PathBuf>, config: StoreConfig) -> StoreResult<Self> {
        let root = root.into();
        let meta = std::fs::metadata(&root).map_err(|e| StoreError::io(&root, e))?;
        if !meta.is_dir() {
            return Err(StoreError::io(
                &root,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
            ));
        }
        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn merged_path(&self) -> PathBuf {
        self.root.join(&self.config.merged_file)
    }

    pub fn language_path(&self, lang: &LangCode) -> PathBuf {
        self.root.join(file_name(lang))
    }

    /// The schema file to validate against: the configured one, or
    /// `schema.json` in the directory if present. `None` leaves the choice to
    /// the caller.
    pub fn schema_path(&self) -> Option<PathBuf> {
        match &self.config.schema {
            Some(path) => Some(self.root.join(path)),
            None => Some(self.root.join(DEFAULT_SCHEMA_FILE)).filter(|p| p.is_file()),
        }
    }

    /// Language files in the directory, sorted by path.
    pub fn language_files(&self) -> StoreResult<Vec<(LangCode, PathBuf)>> {
        let merged = self.merged_path();
        let mut found = Vec::new();
        for entry in std::fs::read_dir(&self.root).map_err(|e| StoreError::io(&self.root, e))? {
            let path = entry.map_err(|e| StoreError::io(&self.root, e))?.path();
            if !path.is_file() || path == merged {
                continue;
            }
            match language_of(&path) {
                Some(lang) => found.push((lang, path)),
                None => debug!(path = %path.display(), "not a language file"),
            }
        }
        found.sort_by(|a, b| a.1.cmp(&b.1));
        Ok(found)
    }
}

fn read_json(path: &Path) -> StoreResult<Value> {
    let raw = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl DocumentSource for DirectoryStore {
    fn load_languages(&self) -> StoreResult<LangMap> {
        let files = self.language_files()?;
        if files.is_empty() {
            return Err(StoreError::NoLanguageFiles(self.root.clone()));
        }

        let mut langs = LangMap::new();
        for (lang, path) in files {
            info!(%lang, path = %path.display(), "found language file");
            let document = read_json(&path)?;
            langs.insert(lang, document);
        }
        Ok(langs)
    }

    fn load_merged(&self) -> StoreResult<Value> {
        let path = self.merged_path();
        if !path.is_file() {
            return Err(StoreError::MergedNotFound(path));
        }
        info!(path = %path.display(), "loading merged document");
        read_json(&path)
    }
}

impl OutputSink for DirectoryStore {
    fn write_languages(&self, documents: &LangMap) -> StoreResult<()> {
        let mut batch = WriteBatch::new(self.config.indent);
        for (lang, document) in documents {
            batch.stage(self.language_path(lang), document)?;
        }
        batch.commit()?;
        Ok(())
    }

    fn write_merged(&self, document: &Value) -> StoreResult<()> {
        let mut batch = WriteBatch::new(self.config.indent);
        batch.stage(self.merged_path(), document)?;
        batch.commit()?;
        Ok(())
    }
}
