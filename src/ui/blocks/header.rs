//! Command header: which project a command runs on, and how.
//!
//! ```text
//! ⚙ Deodar Build
//! Project: acme (plugin)
//! Mode: production, minified
//! ```

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use deodar::domain::entities::ProjectConfig;
use deodar::domain::value_objects::BuildMode;

#[derive(Debug, Clone)]
pub struct ProjectHeader<'a> {
    icon: Icon,
    title: &'static str,
    project: &'a ProjectConfig,
    mode: Option<BuildMode>,
    archive: Option<String>,
    hint: Option<&'static str>,
}

impl<'a> ProjectHeader<'a> {
    pub fn new(icon: Icon, title: &'static str, project: &'a ProjectConfig) -> Self {
        Self {
            icon,
            title,
            project,
            mode: None,
            archive: None,
            hint: None,
        }
    }

    pub fn mode(mut self, mode: BuildMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Archive path, relative to the project root.
    pub fn archive(mut self, archive: impl Into<String>) -> Self {
        self.archive = Some(archive.into());
        self
    }

    pub fn hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::info(self.title).bold().render(supports_color);
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            title
        );

        let row = |label: &str, value: String| {
            format!(
                "{} {}\n",
                ColoredText::dim(format!("{}:", label)).render(supports_color),
                value
            )
        };

        out.push_str(&row(
            "Project",
            format!("{} ({})", self.project.name(), self.project.kind().as_str()),
        ));
        if let Some(mode) = self.mode {
            let detail = if mode.minify() { "minified" } else { "source maps" };
            out.push_str(&row("Mode", format!("{}, {}", mode.as_str(), detail)));
        }
        if let Some(archive) = &self.archive {
            out.push_str(&row("Archive", archive.clone()));
        }
        if let Some(hint) = self.hint {
            out.push_str(&row("Hint", hint.to_string()));
        }
        out
    }
}
