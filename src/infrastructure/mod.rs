//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles process spawning, template files and archives.
//!
//! ## Structure
//!
//! - `bundler/` - Sass + esbuild subprocess bundler
//! - `templates` - Embedded mustache-style templates
//! - `archive` - Zip archive writer

pub mod archive;
pub mod bundler;
pub mod templates;

// Re-export for convenience
pub use archive::ZipArchive;
pub use bundler::ExternalBundler;
pub use templates::{render, write_template, Template, TemplateData};
