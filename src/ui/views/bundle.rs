use crate::ui::blocks::header::ProjectHeader;
use crate::ui::blocks::message::{render_message, MessageKind};
use crate::ui::primitives::icon::Icon;
use deodar::application::{archive_path, BundleReport};
use deodar::domain::entities::ProjectConfig;

pub fn render_bundle_header(
    project: &ProjectConfig,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let archive = archive_path(project);
    ProjectHeader::new(Icon::Bundle, "Deodar Bundle", project)
        .archive(project.relative(&archive).display().to_string())
        .render(supports_color, supports_unicode)
}

pub fn render_bundle_result(
    project: &ProjectConfig,
    report: &BundleReport,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = render_message(
        MessageKind::Success,
        "Archive Created",
        supports_color,
        supports_unicode,
    );
    out.push_str(&format!(
        "  {} ({} files)\n",
        project.relative(&report.archive).display(),
        report.files
    ));
    if verbose > 0 {
        out.push_str(&format!("  {} paths ignored\n", report.ignored));
    }
    out
}
