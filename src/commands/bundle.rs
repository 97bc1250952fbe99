//! `bundle`: zip the project into `dist/<name>.zip`.

use anyhow::Result;

use crate::ui::context::UiContext;
use crate::ui::json::events::StartEvent;
use crate::ui::json::{emit, emit_event};
use crate::ui::views::bundle::{render_bundle_header, render_bundle_result};
use deodar::application::bundle_project;

use super::{report_config_warnings, report_warning, require_project};

pub fn cmd_bundle(ui: &UiContext) -> Result<()> {
    let project = require_project()?;
    report_config_warnings("bundle", &project, ui);

    if ui.json {
        emit_event(&StartEvent::new("bundle"))?;
    } else {
        print!("{}", render_bundle_header(&project, ui.color, ui.unicode));
    }

    let report = bundle_project(&project)?;

    for warning in &report.warnings {
        report_warning("bundle", &warning.to_string(), ui);
    }

    if ui.json {
        emit(serde_json::json!({
            "event": "bundle_complete",
            "command": "bundle",
            "archive": project.relative(&report.archive).display().to_string(),
            "files": report.files,
            "ignored": report.ignored,
        }))?;
    } else {
        print!(
            "{}",
            render_bundle_result(&project, &report, ui.verbose, ui.color, ui.unicode)
        );
    }

    Ok(())
}
