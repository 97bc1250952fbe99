//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use super::types::{ProjectSettings, Toolchain, CONFIG_FILE_NAME};

/// Non-fatal configuration warning (unknown keys are accepted as-is).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

/// Outcome of reading `deodar.json`.
///
/// Only `Loaded` carries user settings; the other branches fall back to
/// [`ProjectSettings::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Loaded {
        settings: ProjectSettings,
        warnings: Vec<ConfigWarning>,
    },
    Missing,
    Invalid {
        file: PathBuf,
        message: String,
    },
}

impl ConfigSource {
    pub fn settings(&self) -> ProjectSettings {
        match self {
            ConfigSource::Loaded { settings, .. } => settings.clone(),
            ConfigSource::Missing | ConfigSource::Invalid { .. } => ProjectSettings::default(),
        }
    }

    pub fn warnings(&self) -> &[ConfigWarning] {
        match self {
            ConfigSource::Loaded { warnings, .. } => warnings,
            _ => &[],
        }
    }
}

/// Read `deodar.json` from `root`.
pub fn load_project_settings(root: &Path) -> ConfigSource {
    let path = root.join(CONFIG_FILE_NAME);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return ConfigSource::Missing,
        Err(e) => {
            return ConfigSource::Invalid {
                file: path,
                message: e.to_string(),
            }
        }
    };

    parse_settings(&path, &content)
}

fn parse_settings(path: &Path, content: &str) -> ConfigSource {
    let mut unknown: Vec<String> = Vec::new();
    let mut deserializer = serde_json::Deserializer::from_str(content);

    let parsed: Result<ProjectSettings, _> = serde_ignored::deserialize(&mut deserializer, |p| {
        unknown.push(p.to_string());
    });

    match parsed.and_then(|settings| deserializer.end().map(|_| settings)) {
        Ok(settings) => ConfigSource::Loaded {
            settings,
            warnings: unknown
                .into_iter()
                .map(|key| ConfigWarning {
                    key,
                    file: path.to_path_buf(),
                })
                .collect(),
        },
        Err(e) => ConfigSource::Invalid {
            file: path.to_path_buf(),
            message: e.to_string(),
        },
    }
}

/// Apply environment variable overrides (DEODAR_* prefix)
pub fn with_env_overrides(toolchain: Toolchain) -> Toolchain {
    with_env_overrides_from(toolchain, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut toolchain: Toolchain,
    get_env: impl Fn(&str) -> Option<String>,
) -> Toolchain {
    // DEODAR_SASS
    if let Some(sass) = get_env("DEODAR_SASS").filter(|v| !v.trim().is_empty()) {
        toolchain.sass = Some(PathBuf::from(sass));
    }

    // DEODAR_ESBUILD
    if let Some(esbuild) = get_env("DEODAR_ESBUILD").filter(|v| !v.trim().is_empty()) {
        toolchain.esbuild = Some(PathBuf::from(esbuild));
    }

    toolchain
}

#[cfg(test)]
pub(crate) fn parse_for_test(content: &str) -> ConfigSource {
    parse_settings(Path::new(CONFIG_FILE_NAME), content)
}
