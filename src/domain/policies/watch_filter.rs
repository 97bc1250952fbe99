//! Watch filter policy
//!
//! Decides whether a file-system change should trigger a rebuild.

use std::path::{Component, Path};

use crate::domain::entities::AssetKind;

/// Path components that never trigger a rebuild.
pub const EXCLUDED_SEGMENTS: &[&str] = &["node_modules", "build", ".git"];

/// Marker found in compiled output names (`foo.build.js`).
pub const OUTPUT_MARKER: &str = ".build.";

/// Why a change was not considered for a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Inside `node_modules`, `build` or `.git`
    ExcludedDirectory,
    /// The changed path is a directory
    Directory,
    /// Compiled output written by a previous build
    CompiledOutput,
    /// Not a `.js` or `.scss` file
    NotCompilable,
}

/// Classify a change to `rel_path` (relative to the project root).
///
/// Returns `None` when the change qualifies for a rebuild.
pub fn classify_change(rel_path: &Path, is_dir: bool) -> Option<IgnoreReason> {
    let excluded = rel_path.components().any(|c| match c {
        Component::Normal(name) => name
            .to_str()
            .is_some_and(|name| EXCLUDED_SEGMENTS.contains(&name)),
        _ => false,
    });
    if excluded {
        return Some(IgnoreReason::ExcludedDirectory);
    }

    if is_dir {
        return Some(IgnoreReason::Directory);
    }

    let file_name = rel_path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    if file_name.contains(OUTPUT_MARKER) {
        return Some(IgnoreReason::CompiledOutput);
    }

    if AssetKind::from_path(rel_path).is_none() {
        return Some(IgnoreReason::NotCompilable);
    }

    None
}
