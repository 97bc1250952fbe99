//! Bundler port - compiles one entry point into one output file
//!
//! Implementations:
//! - `ExternalBundler` - runs the Sass compiler and esbuild as subprocesses
//! - test doubles that write files in-process

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::AssetKind;
use crate::domain::value_objects::BuildMode;

/// Everything needed to compile one file.
#[derive(Debug, Clone, Copy)]
pub struct BundleRequest<'a> {
    pub source: &'a Path,
    pub output: &'a Path,
    pub kind: AssetKind,
    pub mode: BuildMode,
    /// Module name to page-global mapping, only meaningful for scripts.
    pub externals: &'a BTreeMap<String, String>,
}

/// Errors a bundler reports for a single file.
#[derive(Error, Debug)]
pub enum BundlerError {
    /// The compiler executable could not be started
    #[error("could not run {tool}: {message}")]
    ToolUnavailable { tool: PathBuf, message: String },

    /// The compiler ran and reported an error
    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: PathBuf,
        status: String,
        stderr: String,
    },

    /// IO error preparing inputs or outputs
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstract compiler interface
pub trait Bundler {
    /// Compile `request.source` into `request.output`.
    ///
    /// The output directory already exists when this is called.
    fn bundle(&self, request: &BundleRequest<'_>) -> Result<(), BundlerError>;
}

impl<B: Bundler + ?Sized> Bundler for &B {
    fn bundle(&self, request: &BundleRequest<'_>) -> Result<(), BundlerError> {
        (**self).bundle(request)
    }
}

impl<B: Bundler + ?Sized> Bundler for std::sync::Arc<B> {
    fn bundle(&self, request: &BundleRequest<'_>) -> Result<(), BundlerError> {
        (**self).bundle(request)
    }
}
