//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod block_name;
mod build_mode;
mod ignore_patterns;

pub use block_name::{slugify, title_case, BlockName};
pub use build_mode::BuildMode;
pub use ignore_patterns::{IgnorePatterns, IgnoreWarning, BUNDLE_IGNORE_FILE};
