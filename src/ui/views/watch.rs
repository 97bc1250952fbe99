use crate::ui::blocks::header::ProjectHeader;
use crate::ui::blocks::message::{render_message, MessageKind};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::build::{indent_details, render_compiled};
use deodar::application::WatchEvent;
use deodar::domain::entities::ProjectConfig;
use deodar::domain::value_objects::BuildMode;

pub fn render_watch_header(
    project: &ProjectConfig,
    mode: BuildMode,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    ProjectHeader::new(Icon::Watch, "Deodar Watch", project)
        .mode(mode)
        .hint("Press Ctrl+C to stop")
        .render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(supports_color);

    let body = match event {
        WatchEvent::WatchStarted { root, .. } => format!(
            "{} Watching: {}\n",
            Icon::Watch.colored(supports_color, supports_unicode),
            root
        ),
        WatchEvent::Ready => format!(
            "{} Ready for changes\n",
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
        WatchEvent::FileChanged { path } => format!(
            "{} Changed: {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            path
        ),
        WatchEvent::ChangeDropped { path } => {
            if verbose == 0 {
                return None;
            }
            format!(
                "{} Skipped (build running): {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                path
            )
        }
        WatchEvent::BuildStarted { .. } => {
            render_message(MessageKind::Notice, "Started", supports_color, supports_unicode)
        }
        WatchEvent::FileCompiled { source, output } => render_message(
            MessageKind::Success,
            &render_compiled(source, output, supports_color),
            supports_color,
            supports_unicode,
        ),
        WatchEvent::FileFailed { source, error } => {
            let mut out = render_message(
                MessageKind::Error,
                &format!("Failed to compile {}", source),
                supports_color,
                supports_unicode,
            );
            out.push_str(&indent_details(error));
            out
        }
        WatchEvent::BuildComplete {
            compiled, failed, ..
        } => {
            let mut out =
                render_message(MessageKind::Notice, "Finished", supports_color, supports_unicode);
            if *failed > 0 || verbose > 0 {
                out.push_str(&format!("  {} compiled, {} failed\n", compiled, failed));
            }
            out
        }
        WatchEvent::Error { message } => {
            render_message(MessageKind::Error, message, supports_color, supports_unicode)
        }
        WatchEvent::Shutdown => {
            return Some(format!(
                "\n{} {} Watch stopped.\n",
                prefix,
                Icon::Watch.colored(supports_color, supports_unicode)
            ))
        }
    };

    Some(format!("{} {}", prefix, body))
}
