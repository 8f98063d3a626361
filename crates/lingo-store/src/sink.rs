//! Staged file output.
//!
//! Every document of a batch is first written and synced to a temporary file
//! next to its target. Only once the whole batch is staged are the temporary
//! files renamed over their targets, so a serialization or disk-full failure
//! while staging leaves every existing file untouched.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::format::to_pretty_bytes;

/// A set of documents waiting to be persisted together.
pub struct WriteBatch {
    indent: usize,
    staged: Vec<(NamedTempFile, PathBuf)>,
}

impl WriteBatch {
    pub fn new(indent: usize) -> Self {
        Self {
            indent,
            staged: Vec::new(),
        }
    }

    /// Number of staged documents.
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Render `document` into a temporary file destined for `target`.
    pub fn stage(&mut self, target: impl Into<PathBuf>, document: &Value) -> StoreResult<()> {
        let target = target.into();
        let bytes = to_pretty_bytes(document, self.indent)?;

        let dir = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        tmp.write_all(&bytes).map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.as_file().sync_all().map_err(|e| StoreError::io(tmp.path(), e))?;

        debug!(target = %target.display(), bytes = bytes.len(), "staged document");
        self.staged.push((tmp, target));
        Ok(())
    }

    /// Move every staged file over its target. Returns the written paths.
    pub fn commit(self) -> StoreResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.staged.len());
        for (tmp, target) in self.staged {
            tmp.persist(&target)
                .map_err(|e| StoreError::io(&target, e.error))?;
            info!(path = %target.display(), "wrote document");
            written.push(target);
        }
        Ok(written)
    }
}
