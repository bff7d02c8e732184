//! # weft-types
//!
//! Shared identifiers, error types, and physical constants
//! for the weft cloth simulator.
//!
//! This crate has no simulation logic. It defines the vocabulary
//! the other weft crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{WeftError, WeftResult};
pub use ids::{ClothId, FaceId, PointId, ShapeId, SpringId};
