//! `watch`: initial build, then rebuild on every qualifying change.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::ui::context::UiContext;
use crate::ui::json::emit_line;
use crate::ui::views::watch::{render_watch_event, render_watch_header};
use deodar::application::{WatchEvent, WatchOptions};
use deodar::presentation::factory::create_watch_use_case;

use super::{report_config_warnings, require_project};

pub fn cmd_watch(ui: &UiContext) -> Result<()> {
    let project = require_project()?;
    report_config_warnings("watch", &project, ui);

    // Set up Ctrl+C / SIGTERM handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install the interrupt handler")?;

    let options = WatchOptions::default();
    if !ui.json {
        print!("{}", render_watch_header(&project, options.mode, ui.color, ui.unicode));
    }

    let use_case = create_watch_use_case(project, options);
    let ui = *ui;
    use_case.start(running, move |event| {
        if ui.json {
            let _ = emit_line(&event.to_json());
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let Some(rendered) =
            render_watch_event(&timestamp, &event, ui.verbose, ui.color, ui.unicode)
        else {
            return;
        };

        match event {
            WatchEvent::Error { .. } | WatchEvent::FileFailed { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    })?;

    Ok(())
}
