//! Common test utilities for Deodar CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project in a temp directory plus CLI helpers
//! - Assertion macros: `assert_exists!`, `assert_output_contains!`
//! - Fixtures: Reusable project file contents

pub mod assertions;
pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
