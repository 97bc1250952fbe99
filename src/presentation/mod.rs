//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use deodar::presentation::factory;
//!
//! let compiler = factory::create_project_compiler(&project);
//! let report = compiler.compile_project(&project, BuildMode::Production, |_| {});
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_bundler, create_project_compiler, create_watch_use_case};
