//! Project Compiler
//!
//! Compiles the `source` directory and every block, then makes sure every
//! directory carries an `index.php`.

use std::path::Path;

use serde::Serialize;

use crate::domain::entities::{AssetKind, BuildReport, EntryPointSet, ProjectConfig};
use crate::domain::ports::Bundler;
use crate::domain::value_objects::BuildMode;

use super::collect::{block_directories, collect};
use super::compile::compile_one;
use super::index_guard::ensure_index_files;

/// Output location for `source/*` entry points, relative to the source file.
pub const SOURCE_OUTPUT_LOCATION: &str = "../build";

/// Output location for block entry points, relative to the source file.
pub const BLOCK_OUTPUT_LOCATION: &str = "build";

/// Progress events emitted while compiling a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BuildEvent {
    BuildStarted {
        mode: String,
        root: String,
    },
    FileCompiled {
        kind: String,
        source: String,
        output: String,
    },
    FileFailed {
        kind: String,
        source: String,
        output: String,
        error: String,
    },
    IndexWritten {
        path: String,
    },
    IndexFailed {
        path: String,
        message: String,
    },
    BuildFinished {
        compiled: usize,
        failed: usize,
        indexes_written: usize,
        index_failures: usize,
    },
}

impl BuildEvent {
    /// Serialize with a `"command"` field naming the originating command.
    pub fn to_json(&self, command: &str) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!(command));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

fn kind_str(kind: AssetKind) -> String {
    match kind {
        AssetKind::Style => "style",
        AssetKind::Script => "script",
    }
    .to_string()
}

/// Compiles a whole project with an injected [`Bundler`].
pub struct ProjectCompiler<B: Bundler> {
    bundler: B,
}

impl<B: Bundler> ProjectCompiler<B> {
    pub fn new(bundler: B) -> Self {
        Self { bundler }
    }

    pub fn bundler(&self) -> &B {
        &self.bundler
    }

    /// Compile everything once.
    ///
    /// Per-file failures are reported through events and the returned
    /// report; they never stop the remaining files from compiling.
    pub fn compile_project<F>(
        &self,
        project: &ProjectConfig,
        mode: BuildMode,
        on_event: F,
    ) -> BuildReport
    where
        F: Fn(BuildEvent),
    {
        on_event(BuildEvent::BuildStarted {
            mode: mode.as_str().to_string(),
            root: project.root().display().to_string(),
        });

        let mut report = BuildReport::new();

        let source_entries = collect(&project.source_dir());
        self.compile_set(
            project,
            &source_entries,
            Path::new(SOURCE_OUTPUT_LOCATION),
            mode,
            &mut report,
            &on_event,
        );

        for block_dir in block_directories(&project.blocks_dir()) {
            let entries = collect(&block_dir);
            self.compile_set(
                project,
                &entries,
                Path::new(BLOCK_OUTPUT_LOCATION),
                mode,
                &mut report,
                &on_event,
            );
        }

        let indexes = ensure_index_files(project.root(), project.settings());
        for path in &indexes.written {
            on_event(BuildEvent::IndexWritten {
                path: project.relative(path).display().to_string(),
            });
        }
        for failure in &indexes.failures {
            on_event(BuildEvent::IndexFailed {
                path: project.relative(&failure.path).display().to_string(),
                message: failure.message.clone(),
            });
        }
        report.indexes_written = indexes.written;
        report.index_failures = indexes.failures;

        on_event(BuildEvent::BuildFinished {
            compiled: report.compiled(),
            failed: report.failed(),
            indexes_written: report.indexes_written.len(),
            index_failures: report.index_failures.len(),
        });

        report
    }

    fn compile_set<F>(
        &self,
        project: &ProjectConfig,
        entries: &EntryPointSet,
        location: &Path,
        mode: BuildMode,
        report: &mut BuildReport,
        on_event: &F,
    ) where
        F: Fn(BuildEvent),
    {
        for (kind, source) in entries.iter() {
            let outcome = compile_one(&self.bundler, project, source, location, kind, mode);

            let source_rel = project.relative(&outcome.source).display().to_string();
            let output_rel = project.relative(&outcome.output).display().to_string();
            match &outcome.error {
                None => on_event(BuildEvent::FileCompiled {
                    kind: kind_str(kind),
                    source: source_rel,
                    output: output_rel,
                }),
                Some(error) => on_event(BuildEvent::FileFailed {
                    kind: kind_str(kind),
                    source: source_rel,
                    output: output_rel,
                    error: error.clone(),
                }),
            }

            report.outcomes.push(outcome);
        }
    }
}
