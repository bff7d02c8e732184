//! # weft-mesh
//!
//! Initial cloth geometry and the rendering boundary.
//!
//! ## Key Types
//!
//! - [`GridSpec`] — Caller-supplied initialization parameters (dimensions,
//!   spacing, orientation, pin pattern).
//! - [`ClothMesh`] — Validated initial geometry: positions, UVs, triangle
//!   indices, and pin flags laid out as a rectangular grid.
//! - [`VertexBuffer`] — Interleaved `[pos, normal, uv]` buffer handed to
//!   the renderer (8 floats per vertex).

pub mod buffer;
pub mod generators;
pub mod grid;
pub mod mesh;

pub use buffer::{VertexBuffer, FLOATS_PER_VERTEX};
pub use grid::{GridPlane, GridSpec, PinPattern};
pub use mesh::ClothMesh;
