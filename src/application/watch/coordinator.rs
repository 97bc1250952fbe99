//! Watch coordinator
//!
//! Turns one file-system change into at most one rebuild.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::build::ProjectCompiler;
use crate::domain::entities::{BuildReport, ProjectConfig};
use crate::domain::policies::{classify_change, IgnoreReason};
use crate::domain::ports::Bundler;
use crate::domain::value_objects::BuildMode;

use super::event::WatchEvent;
use super::quiescence::Quiescence;
use super::session::WatchSession;

/// What happened to a single change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// The watcher is not ready yet (initial build or cooldown)
    NotReady,
    /// The change did not qualify
    Ignored(IgnoreReason),
    /// Outside the project root
    OutsideProject,
    /// A rebuild was already running; the change was dropped
    Busy,
    /// A rebuild ran
    Rebuilt(BuildReport),
}

pub struct WatchCoordinator<B: Bundler> {
    project: ProjectConfig,
    canonical_root: Option<PathBuf>,
    compiler: ProjectCompiler<B>,
    session: Arc<WatchSession>,
    mode: BuildMode,
    quiescence: Quiescence,
}

impl<B: Bundler> WatchCoordinator<B> {
    pub fn new(project: ProjectConfig, bundler: B, mode: BuildMode, quiescence: Quiescence) -> Self {
        // notify may report canonical paths (e.g. /private/var on macOS)
        let canonical_root = project.root().canonicalize().ok();
        Self {
            project,
            canonical_root,
            compiler: ProjectCompiler::new(bundler),
            session: Arc::new(WatchSession::new()),
            mode,
            quiescence,
        }
    }

    pub fn project(&self) -> &ProjectConfig {
        &self.project
    }

    pub fn session(&self) -> &Arc<WatchSession> {
        &self.session
    }

    pub fn compiler(&self) -> &ProjectCompiler<B> {
        &self.compiler
    }

    /// Full build before the watcher starts. Holds the rebuild slot so no
    /// change can start a second build concurrently.
    pub fn initial_build<F>(&self, on_event: &F) -> BuildReport
    where
        F: Fn(WatchEvent),
    {
        let _guard = self.session.try_begin_rebuild();
        self.run_build(true, on_event)
    }

    /// Handle a change to `path` (absolute, as reported by the watcher).
    pub fn handle_change<F>(&self, path: &Path, is_dir: bool, on_event: &F) -> ChangeOutcome
    where
        F: Fn(WatchEvent),
    {
        if !self.session.is_accepting() {
            return ChangeOutcome::NotReady;
        }

        let Some(rel) = self.relative(path) else {
            return ChangeOutcome::OutsideProject;
        };

        if let Some(reason) = classify_change(&rel, is_dir) {
            return ChangeOutcome::Ignored(reason);
        }

        let Some(_guard) = self.session.try_begin_rebuild() else {
            on_event(WatchEvent::ChangeDropped {
                path: rel.display().to_string(),
            });
            return ChangeOutcome::Busy;
        };

        self.quiescence.wait(path);

        on_event(WatchEvent::FileChanged {
            path: rel.display().to_string(),
        });
        ChangeOutcome::Rebuilt(self.run_build(false, on_event))
    }

    fn run_build<F>(&self, initial: bool, on_event: &F) -> BuildReport
    where
        F: Fn(WatchEvent),
    {
        on_event(WatchEvent::BuildStarted { initial });
        let report = self
            .compiler
            .compile_project(&self.project, self.mode, |event| {
                if let Some(event) = WatchEvent::from_build_event(event) {
                    on_event(event);
                }
            });
        on_event(WatchEvent::build_complete(initial, &report));
        report
    }

    fn relative(&self, path: &Path) -> Option<PathBuf> {
        if let Ok(rel) = path.strip_prefix(self.project.root()) {
            return Some(rel.to_path_buf());
        }
        let canonical = self.canonical_root.as_deref()?;
        path.strip_prefix(canonical).ok().map(Path::to_path_buf)
    }
}
