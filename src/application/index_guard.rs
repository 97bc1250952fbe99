//! Index Guard
//!
//! Drops a "silence is golden" `index.php` into every directory of the
//! project that lacks one, so web servers never list directory contents.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ProjectSettings;
use crate::domain::entities::IndexFailure;
use crate::infrastructure::{write_template, Template, TemplateData};

/// File name written into each directory.
pub const INDEX_FILE: &str = "index.php";

/// What a guard pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexGuardResult {
    pub written: Vec<PathBuf>,
    pub failures: Vec<IndexFailure>,
}

/// Walk `root` and write missing index files.
///
/// A directory whose name is in the skip set is left alone together with
/// its whole subtree. Symbolic links are not followed. An existing
/// `index.php` (of any content) is never touched.
pub fn ensure_index_files(root: &Path, settings: &ProjectSettings) -> IndexGuardResult {
    let mut result = IndexGuardResult::default();
    let data = TemplateData::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if settings.is_skipped(&name) {
            continue;
        }

        let index = dir.join(INDEX_FILE);
        if fs::symlink_metadata(&index).is_err() {
            match write_template(&index, Template::INDEX_PHP, &data) {
                Ok(()) => result.written.push(index),
                Err(e) => result.failures.push(IndexFailure {
                    path: index,
                    message: e.to_string(),
                }),
            }
        }

        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                result.failures.push(IndexFailure {
                    path: dir,
                    message: format!("failed to list directory: {}", e),
                });
                continue;
            }
        };

        let mut children: Vec<PathBuf> = entries
            .flatten()
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .map(|entry| entry.path())
            .collect();
        children.sort();
        // Reverse so the stack pops in sorted order.
        pending.extend(children.into_iter().rev());
    }

    result
}
