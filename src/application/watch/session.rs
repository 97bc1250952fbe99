//! Shared watch state
//!
//! The notify callback runs on its own thread and consults this state to
//! drop events early; the event loop uses it to guarantee that at most one
//! rebuild runs at a time.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Readiness and rebuild flags for one watch session.
#[derive(Debug, Default)]
pub struct WatchSession {
    accepting: AtomicBool,
    rebuilding: AtomicBool,
    rebuilds: AtomicUsize,
}

impl WatchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start accepting changes (end of the initial build and cooldown).
    pub fn mark_ready(&self) {
        self.accepting.store(true, Ordering::SeqCst);
    }

    /// Stop accepting changes.
    pub fn stop(&self) {
        self.accepting.store(false, Ordering::SeqCst);
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting.load(Ordering::SeqCst)
    }

    pub fn is_rebuilding(&self) -> bool {
        self.rebuilding.load(Ordering::SeqCst)
    }

    /// Whether an incoming change could start a rebuild right now.
    pub fn admits_events(&self) -> bool {
        self.is_accepting() && !self.is_rebuilding()
    }

    /// Number of rebuilds started so far.
    pub fn rebuild_count(&self) -> usize {
        self.rebuilds.load(Ordering::SeqCst)
    }

    /// Claim the rebuild slot. Returns `None` if a rebuild is already running.
    pub fn try_begin_rebuild(&self) -> Option<RebuildGuard<'_>> {
        self.rebuilding
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()?;
        self.rebuilds.fetch_add(1, Ordering::SeqCst);
        Some(RebuildGuard { session: self })
    }
}

/// Holds the rebuild slot; releases it when dropped (also on unwind).
#[derive(Debug)]
pub struct RebuildGuard<'a> {
    session: &'a WatchSession,
}

impl Drop for RebuildGuard<'_> {
    fn drop(&mut self) {
        self.session.rebuilding.store(false, Ordering::SeqCst);
    }
}
