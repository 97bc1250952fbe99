//! Domain Layer
//!
//! Pure types and rules for a Deodar project, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Project, entry points, compilation outcomes
//! - `value_objects/` - Build mode, block names, bundle ignore patterns
//! - `policies/` - Watch event filtering rules
//! - `ports/` - Interface definitions for infrastructure (the bundler)
//!
//! ## Design Principles
//!
//! 1. **No processes** - This layer never spawns tools or walks the project tree
//! 2. **Ports & Adapters** - Compilation goes through the `Bundler` port

pub mod entities;
pub mod policies;
pub mod ports;
pub mod value_objects;
