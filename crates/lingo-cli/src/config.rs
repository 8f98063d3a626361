use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use lingo_merge::MergeConfig;
use lingo_store::StoreConfig;

/// Name of the optional configuration file inside the document directory.
pub const CONFIG_FILE: &str = "lingo.toml";

/// Contents of `lingo.toml`. Every table and field is optional.
///
/// ```toml
/// [merge]
/// max_depth = 64
///
/// [store]
/// merged_file = "resume.json"
/// indent = 2
/// schema = "schema.json"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LingoConfig {
    pub merge: MergeConfig,
    pub store: StoreConfig,
}

impl LingoConfig {
    /// Load `lingo.toml` from `dir`, or the defaults if there is none.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self = toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}
