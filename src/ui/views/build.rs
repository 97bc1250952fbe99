use crate::ui::blocks::header::ProjectHeader;
use crate::ui::blocks::message::{render_message, MessageKind};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use deodar::application::BuildEvent;
use deodar::domain::entities::ProjectConfig;
use deodar::domain::value_objects::BuildMode;

pub fn render_build_header(
    project: &ProjectConfig,
    mode: BuildMode,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    ProjectHeader::new(Icon::Build, "Deodar Build", project)
        .mode(mode)
        .render(supports_color, supports_unicode)
}

/// `src to out`, with the paths highlighted.
pub fn render_compiled(source: &str, output: &str, supports_color: bool) -> String {
    format!(
        "{} {} {}",
        ColoredText::warning(source).render(supports_color),
        ColoredText::dim("to").render(supports_color),
        ColoredText::success(output).render(supports_color)
    )
}

/// Indent multi-line tool output under the message line.
pub fn indent_details(details: &str) -> String {
    details
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("    {}\n", line))
        .collect()
}

/// Text for one build event; `None` when the event is hidden at this
/// verbosity.
pub fn render_build_event(
    event: &BuildEvent,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    let line = match event {
        BuildEvent::BuildStarted { .. } => {
            render_message(MessageKind::Notice, "Started", supports_color, supports_unicode)
        }
        BuildEvent::FileCompiled { source, output, .. } => render_message(
            MessageKind::Success,
            &render_compiled(source, output, supports_color),
            supports_color,
            supports_unicode,
        ),
        BuildEvent::FileFailed { source, error, .. } => {
            let mut out = render_message(
                MessageKind::Error,
                &format!("Failed to compile {}", source),
                supports_color,
                supports_unicode,
            );
            out.push_str(&indent_details(error));
            out
        }
        BuildEvent::IndexWritten { path } => {
            if verbose == 0 {
                return None;
            }
            format!(
                "  {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim(format!("wrote {}", path)).render(supports_color)
            )
        }
        BuildEvent::IndexFailed { path, message } => render_message(
            MessageKind::Warning,
            &format!("Couldn't write {}: {}", path, message),
            supports_color,
            supports_unicode,
        ),
        BuildEvent::BuildFinished {
            compiled,
            failed,
            indexes_written,
            ..
        } => {
            let mut out =
                render_message(MessageKind::Notice, "Finished", supports_color, supports_unicode);
            if verbose > 0 || *failed > 0 {
                out.push_str(&format!(
                    "  {} compiled, {} failed, {} index files written\n",
                    compiled, failed, indexes_written
                ));
            }
            out
        }
    };
    Some(line)
}

/// Events that belong on stderr.
pub fn is_diagnostic(event: &BuildEvent) -> bool {
    matches!(
        event,
        BuildEvent::FileFailed { .. } | BuildEvent::IndexFailed { .. }
    )
}
