//! Archive Bundler
//!
//! Packs the project into `dist/<name>.zip`, honouring `.bundleignore`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::entities::ProjectConfig;
use crate::domain::value_objects::{IgnorePatterns, IgnoreWarning};
use crate::error::{DeodarError, DeodarResult};
use crate::infrastructure::archive::entry_name;
use crate::infrastructure::ZipArchive;

/// Directory (relative to the root) the archive is written into.
pub const DIST_DIR: &str = "dist";

/// What a bundle run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleReport {
    pub archive: PathBuf,
    pub files: usize,
    pub ignored: usize,
    pub warnings: Vec<IgnoreWarning>,
}

/// `<root>/dist/<name>.zip`
pub fn archive_path(project: &ProjectConfig) -> PathBuf {
    project
        .root()
        .join(DIST_DIR)
        .join(format!("{}.zip", project.name()))
}

/// Write the project archive, replacing any previous one.
///
/// On failure the partial archive is removed.
pub fn bundle_project(project: &ProjectConfig) -> DeodarResult<BundleReport> {
    let (patterns, warnings) = IgnorePatterns::load(project.root());
    let archive_path = archive_path(project);

    if let Some(dist) = archive_path.parent() {
        fs::create_dir_all(dist)?;
    }
    match fs::remove_file(&archive_path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let mut archive = ZipArchive::create(&archive_path)?;
    let walked = add_tree(&mut archive, project.root(), &patterns);

    let result = walked.and_then(|ignored| {
        archive
            .finish()
            .map(|files| (files, ignored))
            .map_err(|e| e.to_string())
    });

    match result {
        Ok((files, ignored)) => Ok(BundleReport {
            archive: archive_path,
            files,
            ignored,
            warnings,
        }),
        Err(message) => {
            let _ = fs::remove_file(&archive_path);
            Err(DeodarError::Archive {
                path: archive_path,
                message,
            })
        }
    }
}

/// A directory waiting to be walked, with the canonical paths of the
/// directories above it.
struct PendingDir {
    path: PathBuf,
    ancestors: Vec<PathBuf>,
}

/// Add every non-ignored file below `root`; returns the number of ignored
/// paths (a pruned directory counts once).
///
/// Symbolic links are followed: a linked file is archived with its target's
/// content under the link's name, a linked directory is walked. A link that
/// points back at one of its own ancestors, or at nothing, fails the bundle.
fn add_tree(
    archive: &mut ZipArchive,
    root: &Path,
    patterns: &IgnorePatterns,
) -> Result<usize, String> {
    let archive_path = archive.path().to_path_buf();
    let mut ignored = 0;
    let root_canonical =
        fs::canonicalize(root).map_err(|e| format!("failed to resolve {}: {}", root.display(), e))?;
    let mut pending = vec![PendingDir {
        path: root.to_path_buf(),
        ancestors: vec![root_canonical],
    }];

    while let Some(PendingDir { path: dir, ancestors }) = pending.pop() {
        let entries =
            fs::read_dir(&dir).map_err(|e| format!("failed to list {}: {}", dir.display(), e))?;

        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| format!("failed to list {}: {}", dir.display(), e))?;
            children.push(entry);
        }
        children.sort_by_key(|entry| entry.file_name());

        let mut subdirs = Vec::new();
        for entry in children {
            let path = entry.path();
            if path == archive_path {
                continue;
            }

            let file_type = entry
                .file_type()
                .map_err(|e| format!("failed to stat {}: {}", path.display(), e))?;
            let Ok(rel) = path.strip_prefix(root) else {
                continue;
            };

            let is_dir = if file_type.is_symlink() {
                fs::metadata(&path)
                    .map_err(|e| format!("broken symlink {}: {}", rel.display(), e))?
                    .is_dir()
            } else {
                file_type.is_dir()
            };

            if patterns.is_ignored(rel, is_dir) {
                ignored += 1;
                continue;
            }

            if is_dir {
                let canonical = fs::canonicalize(&path)
                    .map_err(|e| format!("failed to resolve {}: {}", rel.display(), e))?;
                if ancestors.contains(&canonical) {
                    return Err(format!("symlink cycle at {}", rel.display()));
                }
                let mut chain = ancestors.clone();
                chain.push(canonical);
                subdirs.push(PendingDir {
                    path,
                    ancestors: chain,
                });
            } else if file_type.is_file() || file_type.is_symlink() {
                archive
                    .add_file(&path, &entry_name(rel))
                    .map_err(|e| format!("failed to add {}: {}", rel.display(), e))?;
            }
        }

        pending.extend(subdirs.into_iter().rev());
    }

    Ok(ignored)
}
