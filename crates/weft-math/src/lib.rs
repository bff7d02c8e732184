//! # weft-math
//!
//! Math primitives for the weft cloth simulator.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Vec2`)
//! - [`Triangle`], a plain geometric triangle decoupled from the particle graph
//! - Normal helpers that never divide by zero

pub mod normal;
pub mod triangle;

// Re-export glam types as the canonical math types for weft.
pub use glam::{Vec2, Vec3};

pub use normal::{normalize_or, triangle_normal};
pub use triangle::Triangle;
