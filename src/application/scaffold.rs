//! Block Scaffolder
//!
//! Creates `blocks/acf/<slug>/` with its `block.json`, PHP render template,
//! stylesheet and (optionally) script.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::entities::ProjectConfig;
use crate::domain::value_objects::BlockName;
use crate::error::{DeodarError, DeodarResult};
use crate::infrastructure::{write_template, Template, TemplateData};

/// Provider directory new blocks are created under.
pub const BLOCK_PROVIDER: &str = "acf";

/// Core block categories offered by the editor.
pub const CATEGORIES: &[&str] = &["text", "media", "design", "widgets", "theme", "custom"];

/// Suggested value when the user picks the `custom` category.
pub const DEFAULT_CUSTOM_CATEGORY: &str = "deodar";

/// Everything needed to scaffold one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpec {
    pub name: BlockName,
    pub title: String,
    pub category: String,
    pub js: bool,
}

impl BlockSpec {
    /// Spec with the default title and the first core category.
    pub fn with_defaults(name: BlockName) -> Self {
        let title = name.default_title();
        Self {
            name,
            title,
            category: CATEGORIES[0].to_string(),
            js: false,
        }
    }
}

/// A block that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedBlock {
    pub slug: String,
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Directory a block with `name` lives in.
pub fn block_dir(project: &ProjectConfig, name: &BlockName) -> PathBuf {
    project
        .blocks_dir()
        .join(BLOCK_PROVIDER)
        .join(name.slug())
}

/// Write a new block into the project.
///
/// Fails with [`DeodarError::BlockExists`] when the directory is already
/// present. If a file cannot be written the half-created directory is
/// removed again.
pub fn create_block(project: &ProjectConfig, spec: &BlockSpec) -> DeodarResult<CreatedBlock> {
    let slug = spec.name.slug().to_string();
    let dir = block_dir(project, &spec.name);

    if let Some(provider_dir) = dir.parent() {
        fs::create_dir_all(provider_dir)?;
    }
    match fs::create_dir(&dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(DeodarError::BlockExists {
                slug,
                path: project.relative(&dir).to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    }

    match write_block_files(&dir, spec) {
        Ok(files) => Ok(CreatedBlock { slug, dir, files }),
        Err(e) => {
            let _ = fs::remove_dir_all(&dir);
            Err(e)
        }
    }
}

fn write_block_files(dir: &Path, spec: &BlockSpec) -> DeodarResult<Vec<PathBuf>> {
    let slug = spec.name.slug();
    let data = TemplateData::new()
        .text("slug", slug)
        .text("pascal", spec.name.pascal_case())
        .text("title", spec.title.as_str())
        .text("category", spec.category.as_str())
        .text("title_json", serde_json::to_string(&spec.title)?)
        .text("category_json", serde_json::to_string(&spec.category)?)
        .flag("js", spec.js);

    let mut files = vec![
        (dir.join("block.json"), Template::BLOCK_JSON),
        (dir.join(format!("{}.php", slug)), Template::BLOCK_PHP),
        (dir.join(format!("{}.scss", slug)), Template::BLOCK_SCSS),
    ];
    if spec.js {
        files.push((dir.join(format!("{}.js", slug)), Template::BLOCK_JS));
    }

    let mut written = Vec::with_capacity(files.len());
    for (path, template) in files {
        write_template(&path, template, &data)?;
        written.push(path);
    }
    Ok(written)
}
