//! Validated initial cloth geometry.
//!
//! A `ClothMesh` is the construction-time input of a cloth: point
//! positions laid out as a `columns × rows` grid, per-point UVs and pin
//! flags, and a flat triangle index buffer. All malformed-input errors
//! surface here, once, before any simulation state exists.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use weft_types::{WeftError, WeftResult};

use crate::generators::grid_geometry;
use crate::grid::GridSpec;

/// Initial cloth geometry in grid layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothMesh {
    /// Points per row.
    pub columns: usize,
    /// Number of rows.
    pub rows: usize,
    /// Row-major point positions.
    pub positions: Vec<Vec3>,
    /// Per-point texture coordinates.
    pub uvs: Vec<Vec2>,
    /// Triangle indices, flat: `[t0v0, t0v1, t0v2, t1v0, ...]`.
    pub indices: Vec<u32>,
    /// Per-point pin flags.
    pub pinned: Vec<bool>,
}

impl ClothMesh {
    /// Builds and validates the mesh described by `spec`.
    pub fn from_grid(spec: &GridSpec) -> WeftResult<Self> {
        spec.validate()?;
        let geometry = grid_geometry(spec);
        let mesh = Self {
            columns: spec.columns,
            rows: spec.rows,
            positions: geometry.positions,
            uvs: geometry.uvs,
            indices: geometry.indices,
            pinned: spec.pinned_flags(),
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Builds a mesh from caller-supplied arrays.
    ///
    /// `positions` must still describe a `columns × rows` grid in row-major
    /// order, since the spring network is derived from grid adjacency.
    /// An empty `uvs` slice is filled with zeros.
    pub fn from_parts(
        columns: usize,
        rows: usize,
        positions: Vec<Vec3>,
        uvs: Vec<Vec2>,
        indices: Vec<u32>,
        pinned: Vec<bool>,
    ) -> WeftResult<Self> {
        let uvs = if uvs.is_empty() {
            vec![Vec2::ZERO; positions.len()]
        } else {
            uvs
        };
        let mesh = Self {
            columns,
            rows,
            positions,
            uvs,
            indices,
            pinned,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Returns the number of points.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the three point indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - Point count matches `columns × rows`
    /// - UV and pin arrays match the point count
    /// - Positions are finite
    /// - Triangle indices are in range and not repeated within a triangle
    pub fn validate(&self) -> WeftResult<()> {
        let n = self.positions.len();

        if self.columns < 2 || self.rows < 2 {
            return Err(WeftError::InvalidMesh(format!(
                "Grid must be at least 2x2, got {}x{}",
                self.columns, self.rows
            )));
        }
        if n != self.columns * self.rows {
            return Err(WeftError::InvalidMesh(format!(
                "Point count ({}) != columns x rows ({} x {})",
                n, self.columns, self.rows
            )));
        }
        if self.uvs.len() != n {
            return Err(WeftError::InvalidMesh(format!(
                "UV count ({}) != point count ({})",
                self.uvs.len(),
                n
            )));
        }
        if self.pinned.len() != n {
            return Err(WeftError::InvalidMesh(format!(
                "Pinned array length ({}) != point count ({})",
                self.pinned.len(),
                n
            )));
        }
        if let Some(i) = self.positions.iter().position(|p| !p.is_finite()) {
            return Err(WeftError::InvalidMesh(format!(
                "Position of point {} is not finite",
                i
            )));
        }

        if self.indices.len() % 3 != 0 {
            return Err(WeftError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }
        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(WeftError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (point count: {})",
                    idx, i, n
                )));
            }
        }
        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(WeftError::InvalidMesh(format!(
                    "Triangle {} has repeated point indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        Ok(())
    }
}
