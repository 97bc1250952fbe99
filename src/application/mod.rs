//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ProjectCompiler` - Compiles `source/` and every block, then guards indexes
//! - `WatchUseCase` - Rebuilds on change with single-flight semantics
//! - `create_block` - Scaffolds a new ACF block
//! - `bundle_project` - Packs the project into `dist/<name>.zip`
//!
//! ## Services
//!
//! - `locate` - Detects the plugin or theme root
//! - `collect` - Finds compilable entry points
//! - `compile_one` - Compiles one entry point through a `Bundler`
//! - `ensure_index_files` - Writes missing `index.php` files

pub mod build;
pub mod bundle;
pub mod collect;
pub mod compile;
pub mod index_guard;
pub mod locate;
pub mod scaffold;
pub mod watch;

pub use build::{BuildEvent, ProjectCompiler, BLOCK_OUTPUT_LOCATION, SOURCE_OUTPUT_LOCATION};
pub use bundle::{archive_path, bundle_project, BundleReport, DIST_DIR};
pub use collect::{block_directories, collect, subdirectories};
pub use compile::compile_one;
pub use index_guard::{ensure_index_files, IndexGuardResult, INDEX_FILE};
pub use locate::{detect_kind, locate, locate_in};
pub use scaffold::{
    block_dir, create_block, BlockSpec, CreatedBlock, BLOCK_PROVIDER, CATEGORIES,
    DEFAULT_CUSTOM_CATEGORY,
};
pub use watch::{
    ChangeOutcome, Quiescence, RebuildGuard, WatchCoordinator, WatchEvent, WatchOptions,
    WatchSession, WatchUseCase,
};
