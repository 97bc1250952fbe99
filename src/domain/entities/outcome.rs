//! Compilation outcomes and the per-build report

use std::path::PathBuf;

use super::entry_points::AssetKind;

/// Result of compiling one entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationOutcome {
    pub source: PathBuf,
    pub output: PathBuf,
    pub kind: AssetKind,
    /// Present iff the compilation failed.
    pub error: Option<String>,
}

impl CompilationOutcome {
    pub fn success(source: PathBuf, output: PathBuf, kind: AssetKind) -> Self {
        Self {
            source,
            output,
            kind,
            error: None,
        }
    }

    pub fn failure(
        source: PathBuf,
        output: PathBuf,
        kind: AssetKind,
        error: impl Into<String>,
    ) -> Self {
        Self {
            source,
            output,
            kind,
            error: Some(error.into()),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// A directory the index guard could not write to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Everything one project build did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub outcomes: Vec<CompilationOutcome>,
    pub indexes_written: Vec<PathBuf>,
    pub index_failures: Vec<IndexFailure>,
}

impl BuildReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compiled(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.succeeded()).count()
    }

    /// True when every entry point compiled and every guard file was written.
    pub fn is_success(&self) -> bool {
        self.failed() == 0 && self.index_failures.is_empty()
    }
}
