//! Configuration module for Deodar
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DEODAR_*)
//! 3. Project config (`deodar.json` in the project root)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_project_settings, with_env_overrides, ConfigSource, ConfigWarning};
pub use types::{ProjectSettings, Toolchain, CONFIG_FILE_NAME};
