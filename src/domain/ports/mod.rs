//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod bundler;

pub use bundler::{BundleRequest, Bundler, BundlerError};
