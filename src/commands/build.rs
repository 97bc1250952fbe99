//! `development` and `production`: one-shot project compilation.

use std::time::Instant;

use anyhow::Result;

use crate::ui::context::UiContext;
use crate::ui::json::emit_line;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::views::build::{is_diagnostic, render_build_event, render_build_header};
use deodar::domain::value_objects::BuildMode;
use deodar::presentation::factory::create_project_compiler;

use super::{report_config_warnings, require_project};

/// Compile the project once. Per-file failures are reported but do not
/// change the exit code.
pub fn cmd_build(mode: BuildMode, ui: &UiContext) -> Result<()> {
    let command = mode.as_str();
    let project = require_project()?;
    report_config_warnings(command, &project, ui);

    if ui.json {
        emit_event(&StartEvent::new(command))?;
    } else {
        print!(
            "{}",
            render_build_header(&project, mode, ui.color, ui.unicode)
        );
    }

    let started = Instant::now();
    let compiler = create_project_compiler(&project);
    let report = compiler.compile_project(&project, mode, |event| {
        if ui.json {
            let _ = emit_line(&event.to_json(command));
            return;
        }
        let Some(rendered) = render_build_event(&event, ui.verbose, ui.color, ui.unicode) else {
            return;
        };
        if is_diagnostic(&event) {
            eprint!("{rendered}");
        } else {
            print!("{rendered}");
        }
    });

    if ui.json {
        let complete = if report.is_success() {
            CompleteEvent::success(command)
        } else {
            CompleteEvent::failure(command)
        };
        emit_event(&complete.with_duration(started.elapsed().as_millis() as u64))?;
    }

    Ok(())
}
