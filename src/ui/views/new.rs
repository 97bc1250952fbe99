use crate::ui::blocks::message::{render_message, MessageKind};
use crate::ui::primitives::icon::Icon;
use deodar::application::CreatedBlock;
use deodar::domain::entities::ProjectConfig;

pub fn render_block_created(
    project: &ProjectConfig,
    created: &CreatedBlock,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = render_message(
        MessageKind::Success,
        &format!(
            "Block '{}' created in {}",
            created.slug,
            project.relative(&created.dir).display()
        ),
        supports_color,
        supports_unicode,
    );
    for file in &created.files {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            project.relative(file).display()
        ));
    }
    out
}
