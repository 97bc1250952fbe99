//! Deodar - build tool for WordPress plugins and themes
//!
//! Deodar scaffolds ACF blocks, compiles SCSS and JavaScript entry points of
//! a plugin or theme with external compilers, rebuilds on change, and packs
//! the project into a distributable zip archive.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    bundle_project, create_block, locate, locate_in, BlockSpec, BuildEvent, BundleReport,
    ProjectCompiler, WatchEvent, WatchOptions, WatchUseCase,
};
pub use config::{ProjectSettings, CONFIG_FILE_NAME};
pub use domain::entities::{BuildReport, CompilationOutcome, ProjectConfig, ProjectKind};
pub use domain::value_objects::{BlockName, BuildMode};
pub use error::{DeodarError, DeodarResult};
pub use presentation::{Cli, ColorWhen, Commands};
