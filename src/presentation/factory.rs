//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{ProjectCompiler, WatchOptions, WatchUseCase};
use crate::config::{with_env_overrides, Toolchain};
use crate::domain::entities::ProjectConfig;
use crate::infrastructure::ExternalBundler;

/// Type alias for the compiler used by `development` and `production`
pub type ConcreteProjectCompiler = ProjectCompiler<ExternalBundler>;

/// Type alias for the watch use case with the external toolchain
pub type ConcreteWatchUseCase = WatchUseCase<ExternalBundler>;

/// Bundler driving the `sass` and `esbuild` executables for `project`.
///
/// `DEODAR_SASS` / `DEODAR_ESBUILD` override tool discovery.
pub fn create_bundler(project: &ProjectConfig) -> ExternalBundler {
    let toolchain = with_env_overrides(Toolchain::default());
    ExternalBundler::new(project.root(), &toolchain)
}

pub fn create_project_compiler(project: &ProjectConfig) -> ConcreteProjectCompiler {
    ProjectCompiler::new(create_bundler(project))
}

pub fn create_watch_use_case(project: ProjectConfig, options: WatchOptions) -> ConcreteWatchUseCase {
    let bundler = create_bundler(&project);
    WatchUseCase::new(project, bundler, options)
}
