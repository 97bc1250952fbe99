//! Project entity - a located plugin or theme root

use std::path::{Path, PathBuf};

use crate::config::{ConfigSource, ProjectSettings};

/// What kind of WordPress package the root holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    /// `<basename>.php` exists in the root
    Plugin,
    /// `functions.php` and `style.css` exist in the root
    Theme,
}

impl ProjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::Plugin => "plugin",
            ProjectKind::Theme => "theme",
        }
    }
}

/// A located project. Built once per command and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    root: PathBuf,
    kind: ProjectKind,
    settings: ProjectSettings,
    config: ConfigSource,
}

impl ProjectConfig {
    pub fn new(root: impl Into<PathBuf>, kind: ProjectKind, settings: ProjectSettings) -> Self {
        Self {
            root: root.into(),
            kind,
            settings,
            config: ConfigSource::Missing,
        }
    }

    /// Build from the result of reading `deodar.json`, keeping it so that
    /// its warnings can be reported without reading the file again.
    pub fn from_config(root: impl Into<PathBuf>, kind: ProjectKind, config: ConfigSource) -> Self {
        Self {
            root: root.into(),
            kind,
            settings: config.settings(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    pub fn settings(&self) -> &ProjectSettings {
        &self.settings
    }

    /// How `deodar.json` was loaded (defaults when built with [`Self::new`]).
    pub fn config_source(&self) -> &ConfigSource {
        &self.config
    }

    /// Directory name of the root, used for the archive name.
    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string())
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.join("source")
    }

    pub fn blocks_dir(&self) -> PathBuf {
        self.root.join("blocks")
    }

    /// Path relative to the root for display; falls back to the full path.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
