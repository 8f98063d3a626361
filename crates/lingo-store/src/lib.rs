//! Document storage for Lingo.
//!
//! Everything around the merge engine that touches the outside world:
//! finding `<lang>.json` files, loading the merged `resume.json`, and writing
//! results back as pretty-printed JSON.
//!
//! # Backends
//!
//! Both backends implement [`DocumentSource`] and [`OutputSink`]:
//!
//! - [`DirectoryStore`] -- a directory on disk, with staged writes
//! - [`InMemoryDocumentStore`] -- `RwLock`-guarded maps for tests and embedding
//!
//! # Utilities
//!
//! - [`sort_skills`] -- stable ordering of a résumé's `skills` by name

pub mod config;
pub mod dir;
pub mod error;
pub mod format;
pub mod lang_file;
pub mod memory;
pub mod sink;
pub mod skills;
pub mod traits;

pub use config::{StoreConfig, DEFAULT_MERGED_FILE, DEFAULT_SCHEMA_FILE};
pub use dir::DirectoryStore;
pub use error::{StoreError, StoreResult};
pub use format::to_pretty_bytes;
pub use lang_file::{file_name, language_of};
pub use memory::InMemoryDocumentStore;
pub use sink::WriteBatch;
pub use skills::sort_skills;
pub use traits::{DocumentSource, OutputSink};
