//! Configuration type definitions

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Name of the optional project configuration file.
pub const CONFIG_FILE_NAME: &str = "deodar.json";

/// Settings read from `deodar.json`.
///
/// ```json
/// {
///   "externals": { "jquery": "jQuery" },
///   "skip": ["node_modules", "vendor"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Module name to page-global mapping. Every key is kept out of the
    /// script bundles and resolved to `window.<value>` instead.
    #[serde(default = "default_externals")]
    pub externals: BTreeMap<String, String>,

    /// Directory names the index guard pass does not descend into.
    #[serde(default)]
    pub skip: BTreeSet<String>,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            externals: default_externals(),
            skip: BTreeSet::new(),
        }
    }
}

impl ProjectSettings {
    pub fn is_skipped(&self, dir_name: &str) -> bool {
        self.skip.contains(dir_name)
    }
}

fn default_externals() -> BTreeMap<String, String> {
    let mut externals = BTreeMap::new();
    externals.insert("jquery".to_string(), "jQuery".to_string());
    externals
}

/// Locations of the external compilers.
///
/// `None` means "discover": `node_modules/.bin/<tool>` in the project root
/// when present, otherwise the bare tool name resolved through `PATH`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toolchain {
    pub sass: Option<PathBuf>,
    pub esbuild: Option<PathBuf>,
}
