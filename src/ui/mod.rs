//! Terminal and NDJSON output for the `deodar` binary.

pub mod blocks;
pub mod context;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
