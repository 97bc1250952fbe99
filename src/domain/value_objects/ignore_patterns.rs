//! Bundle ignore patterns
//!
//! Loads `.bundleignore` and matches paths with gitignore semantics, so a
//! bare `*.log` matches at any depth and `dist/` excludes the whole directory.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the ignore file read from the project root.
pub const BUNDLE_IGNORE_FILE: &str = ".bundleignore";

/// Patterns loaded from a `.bundleignore` file.
#[derive(Debug)]
pub struct IgnorePatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl Default for IgnorePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl IgnorePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            pattern_count: 0,
        }
    }

    /// Load patterns from `<root>/.bundleignore`.
    ///
    /// Never fails: a missing file yields an empty set, an unreadable file
    /// yields an empty set plus a warning, and invalid lines are skipped with
    /// a warning each.
    pub fn load(root: &Path) -> (Self, Vec<IgnoreWarning>) {
        let ignore_path = root.join(BUNDLE_IGNORE_FILE);

        match fs::read_to_string(&ignore_path) {
            Ok(content) => Self::from_content(root, &ignore_path, &content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => (Self::empty(), Vec::new()),
            Err(e) => (
                Self::empty(),
                vec![IgnoreWarning::Unreadable {
                    path: ignore_path,
                    message: e.to_string(),
                }],
            ),
        }
    }

    /// Parse patterns from string content.
    pub fn from_content(
        root: &Path,
        source_path: &Path,
        content: &str,
    ) -> (Self, Vec<IgnoreWarning>) {
        let mut builder = GitignoreBuilder::new(root);
        let mut pattern_count = 0;
        let mut warnings = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            // Skip empty lines and comments
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            match builder.add_line(Some(source_path.to_path_buf()), trimmed) {
                Ok(_) => pattern_count += 1,
                Err(e) => warnings.push(IgnoreWarning::InvalidPattern {
                    path: source_path.to_path_buf(),
                    line: line_num + 1,
                    pattern: trimmed.to_string(),
                    message: e.to_string(),
                }),
            }
        }

        match builder.build() {
            Ok(matcher) => (
                Self {
                    matcher,
                    pattern_count,
                },
                warnings,
            ),
            Err(e) => {
                warnings.push(IgnoreWarning::BuildFailed(e.to_string()));
                (Self::empty(), warnings)
            }
        }
    }

    /// Check if a path relative to the project root should be left out.
    ///
    /// `is_dir` should be true if the path is a directory.
    pub fn is_ignored(&self, rel_path: &Path, is_dir: bool) -> bool {
        if self.pattern_count == 0 {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    /// Get the number of patterns loaded.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Check if this is an empty pattern set.
    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

/// Problems found while loading `.bundleignore`. None of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreWarning {
    /// The file exists but could not be read.
    Unreadable { path: PathBuf, message: String },
    /// A pattern has invalid syntax and was skipped.
    InvalidPattern {
        path: PathBuf,
        line: usize,
        pattern: String,
        message: String,
    },
    /// Failed to build the matcher; nothing is ignored.
    BuildFailed(String),
}

impl fmt::Display for IgnoreWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, message } => {
                write!(f, "could not read {}: {}", path.display(), message)
            }
            Self::InvalidPattern {
                path,
                line,
                pattern,
                message,
            } => {
                write!(
                    f,
                    "invalid pattern at {}:{}: '{}' - {}",
                    path.display(),
                    line,
                    pattern,
                    message
                )
            }
            Self::BuildFailed(msg) => write!(f, "failed to build ignore matcher: {}", msg),
        }
    }
}
