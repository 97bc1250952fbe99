//! Domain Entities
//!
//! - `ProjectConfig` - A located plugin or theme root
//! - `EntryPointSet` - Compilable files found in one directory
//! - `CompilationOutcome` / `BuildReport` - Results of a project build

mod entry_points;
mod outcome;
mod project;

pub use entry_points::{output_path, AssetKind, EntryPointSet};
pub use outcome::{BuildReport, CompilationOutcome, IndexFailure};
pub use project::{ProjectConfig, ProjectKind};
