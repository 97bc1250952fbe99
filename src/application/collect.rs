//! Entry-Point Collector
//!
//! Finds compilable files directly inside a directory, and enumerates the
//! `blocks/<provider>/<block>` tree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::entities::EntryPointSet;

/// Collect `.scss` and `.js` files that are direct children of `directory`.
///
/// A missing or unreadable directory yields an empty set.
pub fn collect(directory: &Path) -> EntryPointSet {
    let mut set = EntryPointSet::new();

    let Ok(entries) = fs::read_dir(directory) else {
        return set;
    };

    for entry in entries.flatten() {
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        set.push(entry.path());
    }

    set
}

/// Names of the sub-directories of `directory`, in listing order.
pub fn subdirectories(directory: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

/// Every `<blocks_dir>/<provider>/<block>` directory.
///
/// A missing `blocks` directory (or provider directory) counts as having no
/// blocks.
pub fn block_directories(blocks_dir: &Path) -> Vec<PathBuf> {
    let providers = subdirectories(blocks_dir).unwrap_or_default();

    let mut blocks = Vec::new();
    for provider in providers {
        let provider_dir = blocks_dir.join(&provider);
        for block in subdirectories(&provider_dir).unwrap_or_default() {
            blocks.push(provider_dir.join(block));
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn collects_only_direct_compilable_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("main.scss"), "").unwrap();
        fs::write(dir.path().join("main.js"), "").unwrap();
        fs::write(dir.path().join("main.php"), "").unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.js"), "").unwrap();

        let set = collect(dir.path());
        assert_eq!(set.styles(), &[dir.path().join("main.scss")]);
        assert_eq!(set.scripts(), &[dir.path().join("main.js")]);
    }

    #[test]
    fn directory_named_like_script_is_skipped() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("weird.js")).unwrap();

        assert!(collect(dir.path()).is_empty());
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempdir().unwrap();
        assert!(collect(&dir.path().join("does-not-exist")).is_empty());
    }

    #[test]
    fn enumerates_provider_and_block_levels() {
        let dir = tempdir().unwrap();
        let blocks = dir.path().join("blocks");
        fs::create_dir_all(blocks.join("acf").join("hero")).unwrap();
        fs::create_dir_all(blocks.join("acf").join("cta")).unwrap();
        fs::create_dir_all(blocks.join("native").join("quote")).unwrap();
        fs::write(blocks.join("acf").join("index.php"), "").unwrap();

        let mut found = block_directories(&blocks);
        found.sort();

        assert_eq!(
            found,
            vec![
                blocks.join("acf").join("cta"),
                blocks.join("acf").join("hero"),
                blocks.join("native").join("quote"),
            ]
        );
    }

    #[test]
    fn missing_blocks_directory_means_zero_blocks() {
        let dir = tempdir().unwrap();
        assert!(block_directories(&dir.path().join("blocks")).is_empty());
    }
}
