//! `starform`: a 2D affine transform engine driving a single star polygon (or a text anchor) inside a bounded viewport.

/// Translate, rotate, scale and reflect, together with the boundary policy that governs translation
pub mod engine;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Exporting sessions into and importing them out of external representations, SVG rendering
pub mod io;

/// Session state: current subject, mode, commands and per-tick input
pub mod session;

/// Helper functions which do not belong to any specific module
pub mod util;
