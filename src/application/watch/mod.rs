//! Watch Use Case
//!
//! Rebuilds the project whenever a source file changes. It combines:
//! - File system monitoring (via `notify` crate)
//! - A change filter (only `.js` / `.scss`, never build output)
//! - Write quiescence (wait until the editor has finished saving)
//! - Single-flight rebuilds (changes during a rebuild are dropped)
//!
//! ## Architecture
//!
//! - `WatchSession` - Shared readiness and rebuild flags
//! - `WatchCoordinator` - Decides what a single change does
//! - `WatchUseCase` - Owns the watcher and the event loop
//! - `WatchEvent` - Events emitted during watch operation
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(project, bundler, WatchOptions::default());
//! use_case.start(running, |event| { ... });
//! ```

mod coordinator;
mod event;
mod quiescence;
mod session;
mod use_case;


pub use coordinator::{ChangeOutcome, WatchCoordinator};
pub use event::{WatchEvent, WatchOptions};
pub use quiescence::Quiescence;
pub use session::{RebuildGuard, WatchSession};
pub use use_case::WatchUseCase;
