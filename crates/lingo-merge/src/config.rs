use serde::{Deserialize, Serialize};

/// Default nesting limit, matching the recursion limit `serde_json` applies
/// when parsing.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration shared by the merger and the unmerger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Deepest node, counted in path segments below the root, that either
    /// algorithm will descend into. Deeper documents fail with
    /// [`MergeError::DepthExceeded`](crate::MergeError::DepthExceeded).
    pub max_depth: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
