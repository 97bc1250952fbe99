//! `new`: scaffold a block under `blocks/acf/<slug>`.
//!
//! Values missing from the command line are prompted for on an interactive
//! terminal. With `--yes` (or without a terminal) defaults are used instead.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};

use crate::ui::context::UiContext;
use crate::ui::json::emit;
use crate::ui::theme::prompt_theme;
use crate::ui::views::new::render_block_created;
use deodar::application::{create_block, BlockSpec, CATEGORIES, DEFAULT_CUSTOM_CATEGORY};
use deodar::domain::value_objects::BlockName;
use deodar::error::DeodarError;

use super::{report_config_warnings, require_project};

/// Options collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct NewOptions {
    pub name: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub js: bool,
    pub yes: bool,
}

pub fn cmd_new(options: NewOptions, ui: &UiContext) -> Result<()> {
    let project = require_project()?;
    report_config_warnings("new", &project, ui);

    let interactive = ui.can_prompt() && !options.yes;
    let spec = resolve_spec(options, ui, interactive)?;
    let created = create_block(&project, &spec)?;

    if ui.json {
        emit(serde_json::json!({
            "event": "block_created",
            "command": "new",
            "slug": created.slug,
            "path": project.relative(&created.dir).display().to_string(),
            "files": created
                .files
                .iter()
                .map(|f| project.relative(f).display().to_string())
                .collect::<Vec<_>>(),
        }))?;
    } else {
        print!(
            "{}",
            render_block_created(&project, &created, ui.color, ui.unicode)
        );
    }

    Ok(())
}

fn resolve_spec(options: NewOptions, ui: &UiContext, interactive: bool) -> Result<BlockSpec> {
    let theme = prompt_theme(ui.color);

    let raw_name = match options.name {
        Some(name) => name,
        None if interactive => Input::<String>::with_theme(theme.as_ref())
            .with_prompt("Block name")
            .interact_text()?,
        None => bail!("a block name is required when not running interactively"),
    };
    let name = BlockName::new(raw_name.as_str()).ok_or(DeodarError::InvalidBlockName {
        name: raw_name.clone(),
    })?;

    let title = match options.title {
        Some(title) => title,
        None if interactive => Input::<String>::with_theme(theme.as_ref())
            .with_prompt("Block title")
            .default(name.default_title())
            .interact_text()?,
        None => name.default_title(),
    };

    let category = match options.category {
        Some(category) => category,
        None if interactive => prompt_category(theme.as_ref())?,
        None => CATEGORIES[0].to_string(),
    };

    let js = options.js
        || (interactive
            && Confirm::with_theme(theme.as_ref())
                .with_prompt("Does this block need JavaScript?")
                .default(false)
                .interact()?);

    Ok(BlockSpec {
        name,
        title,
        category,
        js,
    })
}

fn prompt_category(theme: &dyn dialoguer::theme::Theme) -> Result<String> {
    let selection = Select::with_theme(theme)
        .with_prompt("Block category")
        .items(CATEGORIES)
        .default(0)
        .interact()?;

    let choice = CATEGORIES[selection];
    if choice != "custom" {
        return Ok(choice.to_string());
    }

    let custom = Input::<String>::with_theme(theme)
        .with_prompt("Custom category")
        .default(DEFAULT_CUSTOM_CATEGORY.to_string())
        .interact_text()?;
    Ok(custom)
}
