//! Write quiescence
//!
//! Editors often save in several writes. A changed file is only compiled
//! once its size and modification time have stopped changing.

use std::fs;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant, SystemTime};

/// How long a file must stay unchanged.
pub const STABILITY_THRESHOLD_MS: u64 = 100;

/// Interval between two size/mtime samples.
pub const STABILITY_POLL_MS: u64 = 100;

/// Upper bound on the wait; a file still changing after this is compiled
/// anyway.
pub const STABILITY_TIMEOUT_MS: u64 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quiescence {
    pub stable_for: Duration,
    pub poll: Duration,
    pub timeout: Duration,
}

impl Default for Quiescence {
    fn default() -> Self {
        Self {
            stable_for: Duration::from_millis(STABILITY_THRESHOLD_MS),
            poll: Duration::from_millis(STABILITY_POLL_MS),
            timeout: Duration::from_millis(STABILITY_TIMEOUT_MS),
        }
    }
}

type Fingerprint = Option<(u64, Option<SystemTime>)>;

fn fingerprint(path: &Path) -> Fingerprint {
    let meta = fs::metadata(path).ok()?;
    Some((meta.len(), meta.modified().ok()))
}

impl Quiescence {
    /// No waiting at all.
    pub fn disabled() -> Self {
        Self {
            stable_for: Duration::ZERO,
            poll: Duration::ZERO,
            timeout: Duration::ZERO,
        }
    }

    /// Block until `path` has been stable for `stable_for`.
    ///
    /// Returns `false` when the timeout elapsed first. A file that does not
    /// exist counts as stable once it stays absent.
    pub fn wait(&self, path: &Path) -> bool {
        if self.stable_for.is_zero() {
            return true;
        }

        let start = Instant::now();
        let mut last = fingerprint(path);
        let mut stable_since = Instant::now();

        loop {
            if stable_since.elapsed() >= self.stable_for {
                return true;
            }
            if start.elapsed() >= self.timeout {
                return false;
            }

            thread::sleep(self.poll);

            let current = fingerprint(path);
            if current != last {
                last = current;
                stable_since = Instant::now();
            }
        }
    }
}
