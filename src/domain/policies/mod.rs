//! Domain Policies
//!
//! Business rules that govern behavior. Pure functions over paths.

mod watch_filter;

pub use watch_filter::{classify_change, IgnoreReason, EXCLUDED_SEGMENTS, OUTPUT_MARKER};
