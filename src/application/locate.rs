//! Project Locator
//!
//! A directory is a project root when it holds either a plugin entry point
//! (`<dirname>.php`) or the two files every theme needs (`functions.php` and
//! `style.css`).

use std::path::Path;

use crate::config::load_project_settings;
use crate::domain::entities::{ProjectConfig, ProjectKind};

/// Locate the project in the current working directory.
pub fn locate() -> Option<ProjectConfig> {
    let cwd = std::env::current_dir().ok()?;
    locate_in(&cwd)
}

/// Locate the project rooted at `dir`.
///
/// Returns `None` when `dir` is neither a plugin nor a theme root. A
/// relative `dir` is resolved against the working directory. A missing
/// or malformed `deodar.json` never prevents location; defaults are used.
pub fn locate_in(dir: &Path) -> Option<ProjectConfig> {
    // Compilers run from other working directories, so the root is absolute.
    let dir = std::path::absolute(dir).ok()?;
    let kind = detect_kind(&dir)?;
    let config = load_project_settings(&dir);
    Some(ProjectConfig::from_config(dir, kind, config))
}

/// Plugin markers take priority over theme markers.
pub fn detect_kind(dir: &Path) -> Option<ProjectKind> {
    let basename = dir.file_name()?.to_string_lossy();

    if dir.join(format!("{}.php", basename)).is_file() {
        return Some(ProjectKind::Plugin);
    }

    if dir.join("functions.php").is_file() && dir.join("style.css").is_file() {
        return Some(ProjectKind::Theme);
    }

    None
}
