//! Compiler Adapter
//!
//! Turns one entry point into one compiled file and never fails as a whole:
//! errors are captured in the returned [`CompilationOutcome`].

use std::fs;
use std::path::Path;

use crate::domain::entities::{output_path, AssetKind, CompilationOutcome, ProjectConfig};
use crate::domain::ports::{BundleRequest, Bundler};
use crate::domain::value_objects::BuildMode;

/// Compile `source` into `<dir(source)>/<location>/<stem>.build.<ext>`.
pub fn compile_one<B: Bundler>(
    bundler: &B,
    project: &ProjectConfig,
    source: &Path,
    location: &Path,
    kind: AssetKind,
    mode: BuildMode,
) -> CompilationOutcome {
    let output = output_path(source, location, kind);

    if let Some(parent) = output.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            return CompilationOutcome::failure(
                source.to_path_buf(),
                output.clone(),
                kind,
                format!("failed to create {}: {}", parent.display(), e),
            );
        }
    }

    let request = BundleRequest {
        source,
        output: &output,
        kind,
        mode,
        externals: &project.settings().externals,
    };

    match bundler.bundle(&request) {
        Ok(()) => CompilationOutcome::success(source.to_path_buf(), output, kind),
        Err(e) => CompilationOutcome::failure(source.to_path_buf(), output, kind, e.to_string()),
    }
}
