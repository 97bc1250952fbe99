//! Watch Use Case implementation

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::sync::Arc;
use std::time::Instant;

use notify::event::{CreateKind, ModifyKind, RemoveKind};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::entities::ProjectConfig;
use crate::domain::ports::Bundler;
use crate::error::DeodarResult;

use super::coordinator::{ChangeOutcome, WatchCoordinator};
use super::event::{WatchEvent, WatchOptions};

/// Messages from the notify thread to the event loop.
enum WatchSignal {
    Change { path: PathBuf, is_dir: bool },
    Error(String),
}

/// Reads do not change sources, and the compilers read them constantly.
fn is_relevant(kind: &EventKind) -> bool {
    !matches!(
        kind,
        EventKind::Access(_) | EventKind::Modify(ModifyKind::Metadata(_))
    )
}

/// Watch Use Case
///
/// Orchestrates the initial build followed by continuous rebuilds.
/// This is the main entry point for the `deodar watch` command.
pub struct WatchUseCase<B: Bundler> {
    coordinator: WatchCoordinator<B>,
    options: WatchOptions,
}

impl<B: Bundler> WatchUseCase<B> {
    pub fn new(project: ProjectConfig, bundler: B, options: WatchOptions) -> Self {
        Self {
            coordinator: WatchCoordinator::new(project, bundler, options.mode, options.quiescence),
            options,
        }
    }

    pub fn coordinator(&self) -> &WatchCoordinator<B> {
        &self.coordinator
    }

    /// Start watching (blocking)
    ///
    /// Runs the initial build, registers the watcher and processes changes
    /// until the running flag is set to false. Only failing to set up the
    /// watcher is an error; compile failures are reported as events.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> DeodarResult<()>
    where
        F: Fn(WatchEvent),
    {
        let project = self.coordinator.project();
        on_event(WatchEvent::WatchStarted {
            root: project.root().display().to_string(),
            mode: self.options.mode.as_str().to_string(),
        });

        self.coordinator.initial_build(&on_event);

        if !running.load(Ordering::SeqCst) {
            on_event(WatchEvent::Shutdown);
            return Ok(());
        }

        let (tx, rx) = channel();
        let session = Arc::clone(self.coordinator.session());

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    if !is_relevant(&event.kind) || !session.admits_events() {
                        return;
                    }
                    let folder_event = matches!(
                        event.kind,
                        EventKind::Create(CreateKind::Folder)
                            | EventKind::Remove(RemoveKind::Folder)
                    );
                    for path in event.paths {
                        let is_dir = folder_event || path.is_dir();
                        let _ = tx.send(WatchSignal::Change { path, is_dir });
                    }
                }
                Err(e) => {
                    let _ = tx.send(WatchSignal::Error(e.to_string()));
                }
            },
            Config::default(),
        )?;

        watcher.watch(project.root(), RecursiveMode::Recursive)?;

        // Startup cooldown: drain any initial events from notify (it sometimes sends
        // events for existing files when the watcher is first registered)
        let cooldown_end = Instant::now() + self.options.startup_cooldown;
        while Instant::now() < cooldown_end {
            let _ = rx.recv_timeout(self.options.poll_interval);
        }

        self.coordinator.session().mark_ready();
        on_event(WatchEvent::Ready);

        while running.load(Ordering::SeqCst) {
            match rx.recv_timeout(self.options.poll_interval) {
                Ok(WatchSignal::Change { path, is_dir }) => {
                    let outcome = self.coordinator.handle_change(&path, is_dir, &on_event);
                    if matches!(outcome, ChangeOutcome::Rebuilt(_)) {
                        // Changes queued while the rebuild ran are dropped.
                        for signal in rx.try_iter() {
                            if let WatchSignal::Error(message) = signal {
                                on_event(WatchEvent::Error { message });
                            }
                        }
                    }
                }
                Ok(WatchSignal::Error(message)) => on_event(WatchEvent::Error { message }),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        self.coordinator.session().stop();
        drop(watcher);
        on_event(WatchEvent::Shutdown);
        Ok(())
    }
}
