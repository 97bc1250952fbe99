//! Command handlers for the `deodar` binary.
//!
//! Each handler returns `Ok(())` for exit code 0. Errors are rendered by
//! [`report_error`] and end the process with exit code 1.

pub mod build;
pub mod bundle;
pub mod new;
pub mod watch;

use anyhow::Result;

use crate::ui::blocks::message::{render_message, MessageKind};
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{ErrorEvent, WarningEvent};
use deodar::config::ConfigSource;
use deodar::domain::entities::ProjectConfig;
use deodar::error::DeodarError;

/// Shown when the working directory is neither a plugin nor a theme root.
pub const INVALID_PROJECT_LOCATION: &str =
    "You are not in the project folder, or you didn't name your plugin entry point correctly";

/// Locate the project in the working directory or fail with `NotAProject`.
pub fn require_project() -> Result<ProjectConfig> {
    if let Some(project) = deodar::application::locate() {
        return Ok(project);
    }
    let path = std::env::current_dir().unwrap_or_default();
    let basename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Err(DeodarError::NotAProject {
        path,
        expected: format!("{}.php, or functions.php and style.css", basename),
    }
    .into())
}

/// Surface problems with `deodar.json` without failing the command.
///
/// Unknown keys are only mentioned with `-v`.
pub fn report_config_warnings(command: &str, project: &ProjectConfig, ui: &UiContext) {
    let messages: Vec<String> = match project.config_source() {
        ConfigSource::Invalid { file, message } => vec![format!(
            "Ignoring {} ({}); using defaults",
            project.relative(file).display(),
            message
        )],
        _ if ui.verbose == 0 => Vec::new(),
        source => source
            .warnings()
            .iter()
            .map(|w| {
                format!(
                    "Unknown key '{}' in {}",
                    w.key,
                    project.relative(&w.file).display()
                )
            })
            .collect(),
    };

    for message in messages {
        report_warning(command, &message, ui);
    }
}

pub fn report_warning(command: &str, message: &str, ui: &UiContext) {
    if ui.json {
        let _ = emit_event(&WarningEvent::new(command, message));
    } else {
        eprint!(
            "{}",
            render_message(MessageKind::Warning, message, ui.color, ui.unicode)
        );
    }
}

/// Render a command failure (text to stderr, or an NDJSON `error` event).
pub fn report_error(command: &str, err: &anyhow::Error, ui: &UiContext) {
    let deodar_err = err.downcast_ref::<DeodarError>();
    let kind = match deodar_err {
        Some(DeodarError::NotAProject { .. }) => "not_a_project",
        Some(DeodarError::BlockExists { .. }) => "block_exists",
        Some(DeodarError::InvalidBlockName { .. }) => "invalid_block_name",
        Some(DeodarError::Template { .. }) => "template",
        Some(DeodarError::Archive { .. }) => "archive",
        Some(DeodarError::Watcher(_)) => "watcher",
        Some(DeodarError::Io(_)) => "io",
        Some(DeodarError::Json(_)) => "json",
        None => "error",
    };

    let message = match deodar_err {
        Some(DeodarError::NotAProject { .. }) => INVALID_PROJECT_LOCATION.to_string(),
        Some(DeodarError::Archive { .. }) => "Couldn't create archive.".to_string(),
        _ => format!("{:#}", err),
    };

    if ui.json {
        let _ = emit_event(&ErrorEvent::new(command, kind, message));
        return;
    }

    eprint!(
        "{}",
        render_message(MessageKind::Error, &message, ui.color, ui.unicode)
    );
    let show_details = ui.verbose > 0 || matches!(deodar_err, Some(DeodarError::Archive { .. }));
    if show_details && message != format!("{:#}", err) {
        eprintln!("  {:#}", err);
    }
}
