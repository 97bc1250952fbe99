//! Watch event types and options

use std::time::Duration;

use crate::application::build::BuildEvent;
use crate::domain::entities::BuildReport;
use crate::domain::value_objects::BuildMode;

use super::quiescence::Quiescence;

/// Events drained from notify before the watcher reports ready.
pub const STARTUP_COOLDOWN_MS: u64 = 500;

/// How long the loop blocks waiting for a change before re-checking the
/// running flag.
pub const POLL_INTERVAL_MS: u64 = 50;

/// Watch options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchOptions {
    /// Mode used for every build
    pub mode: BuildMode,
    /// Time spent draining start-up noise from the watcher
    pub startup_cooldown: Duration,
    /// Receive timeout of the event loop
    pub poll_interval: Duration,
    /// Write-finish detection for changed files
    pub quiescence: Quiescence,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            mode: BuildMode::Development,
            startup_cooldown: Duration::from_millis(STARTUP_COOLDOWN_MS),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
            quiescence: Quiescence::default(),
        }
    }
}

impl WatchOptions {
    pub fn with_mode(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_startup_cooldown(mut self, cooldown: Duration) -> Self {
        self.startup_cooldown = cooldown;
        self
    }

    pub fn with_quiescence(mut self, quiescence: Quiescence) -> Self {
        self.quiescence = quiescence;
        self
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted { root: String, mode: String },
    /// Watcher registered; changes are now picked up
    Ready,
    /// A qualifying source file changed
    FileChanged { path: String },
    /// A change arrived while a rebuild was running and was dropped
    ChangeDropped { path: String },
    /// Build started (initial build or rebuild)
    BuildStarted { initial: bool },
    /// One entry point compiled
    FileCompiled { source: String, output: String },
    /// One entry point failed to compile
    FileFailed { source: String, error: String },
    /// Build finished
    BuildComplete {
        initial: bool,
        compiled: usize,
        failed: usize,
        indexes_written: usize,
    },
    /// Error occurred
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Per-file build events worth surfacing while watching.
    pub(crate) fn from_build_event(event: BuildEvent) -> Option<Self> {
        match event {
            BuildEvent::FileCompiled { source, output, .. } => {
                Some(WatchEvent::FileCompiled { source, output })
            }
            BuildEvent::FileFailed { source, error, .. } => {
                Some(WatchEvent::FileFailed { source, error })
            }
            BuildEvent::IndexFailed { path, message } => Some(WatchEvent::Error {
                message: format!("failed to write {}: {}", path, message),
            }),
            _ => None,
        }
    }

    pub(crate) fn build_complete(initial: bool, report: &BuildReport) -> Self {
        WatchEvent::BuildComplete {
            initial,
            compiled: report.compiled(),
            failed: report.failed(),
            indexes_written: report.indexes_written.len(),
        }
    }
}
