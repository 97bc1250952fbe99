//! One-line status messages: `✗ ERROR ...`, `✓ SUCCESS ...`, `  NOTICE ...`.

use crossterm::style::{Color, Stylize};

use crate::ui::primitives::icon::Icon;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Success,
    Notice,
    Warning,
}

impl MessageKind {
    fn label(self) -> &'static str {
        match self {
            MessageKind::Error => "ERROR",
            MessageKind::Success => "SUCCESS",
            MessageKind::Notice => "NOTICE",
            MessageKind::Warning => "WARNING",
        }
    }

    fn icon(self) -> Option<Icon> {
        match self {
            MessageKind::Error => Some(Icon::Error),
            MessageKind::Success => Some(Icon::Success),
            MessageKind::Warning => Some(Icon::Warning),
            MessageKind::Notice => None,
        }
    }

    fn badge_color(self) -> Color {
        match self {
            MessageKind::Error => theme::colors::ERROR,
            MessageKind::Success => theme::colors::SUCCESS,
            MessageKind::Notice => theme::colors::INFO,
            MessageKind::Warning => theme::colors::WARNING,
        }
    }
}

pub fn render_message(
    kind: MessageKind,
    message: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let badge = format!(" {} ", kind.label());
    let badge = if supports_color {
        format!("{}", badge.as_str().black().on(kind.badge_color()))
    } else {
        kind.label().to_string()
    };

    match kind.icon() {
        Some(icon) => format!(
            "{} {} {}\n",
            icon.colored(supports_color, supports_unicode),
            badge,
            message
        ),
        None => format!("  {} {}\n", badge, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_error_line() {
        let line = render_message(MessageKind::Error, "boom", false, true);
        assert_eq!(line, "✗ ERROR boom\n");
    }

    #[test]
    fn notice_is_indented_without_icon() {
        let line = render_message(MessageKind::Notice, "Started", false, false);
        assert_eq!(line, "  NOTICE Started\n");
    }

    #[test]
    fn ascii_success_line() {
        let line = render_message(MessageKind::Success, "done", false, false);
        assert_eq!(line, "[OK] SUCCESS done\n");
    }
}
