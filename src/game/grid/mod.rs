//! Grid geometry.
//!
//! Blocks are addressed by a single row-major cell index.

pub mod grid;

pub use grid::*;
