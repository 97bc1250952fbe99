//! External bundler
//!
//! Compiles entry points by running the Sass compiler (styles) and esbuild
//! (scripts) as subprocesses.

mod external;
mod shims;

pub use external::ExternalBundler;
pub use shims::{shim_source, write_shims, ShimSet};
