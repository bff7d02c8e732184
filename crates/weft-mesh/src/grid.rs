//! Grid initialization parameters.
//!
//! The cloth core never loads geometry itself. Callers describe the
//! rectangular grid they want and the core builds particles from it.

use serde::{Deserialize, Serialize};
use weft_types::{WeftError, WeftResult};

/// Which world plane the grid is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridPlane {
    /// Vertical sheet: columns run along +X, rows run down along -Y.
    /// Faces point toward +Z.
    #[default]
    Xy,
    /// Horizontal sheet: columns run along +X, rows run along +Z.
    /// Faces point toward +Y.
    Xz,
}

/// Which grid points start pinned (immovable).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinPattern {
    /// Nothing pinned; the cloth falls freely.
    #[default]
    None,
    /// The two corners of the first row.
    TopCorners,
    /// Every point of the first row.
    TopEdge,
    /// Explicit row-major point indices.
    Indices(Vec<u32>),
}

/// Rectangular cloth grid description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Points per row (grid width W).
    pub columns: usize,
    /// Number of rows (grid height H).
    pub rows: usize,
    /// Distance between adjacent points (meters).
    pub spacing: f32,
    /// World position of the first point (row 0, column 0).
    pub origin: [f32; 3],
    /// Layout plane.
    #[serde(default)]
    pub plane: GridPlane,
    /// Initially pinned points.
    #[serde(default)]
    pub pins: PinPattern,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: 20,
            rows: 20,
            spacing: 0.05,
            origin: [-0.5, 0.5, 0.0],
            plane: GridPlane::Xy,
            pins: PinPattern::TopCorners,
        }
    }
}

impl GridSpec {
    /// Square `n`×`n` grid with the given spacing, origin at zero.
    pub fn square(n: usize, spacing: f32) -> Self {
        Self {
            columns: n,
            rows: n,
            spacing,
            origin: [0.0, 0.0, 0.0],
            ..Default::default()
        }
    }

    /// Sets the pin pattern.
    pub fn with_pins(mut self, pins: PinPattern) -> Self {
        self.pins = pins;
        self
    }

    /// Sets the origin.
    pub fn with_origin(mut self, origin: [f32; 3]) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the layout plane.
    pub fn with_plane(mut self, plane: GridPlane) -> Self {
        self.plane = plane;
        self
    }

    /// Total number of points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Row-major index of the point at `(column, row)`.
    #[inline]
    pub fn index(&self, column: usize, row: usize) -> usize {
        row * self.columns + column
    }

    /// Checks dimensions, spacing, and pin indices.
    pub fn validate(&self) -> WeftResult<()> {
        if self.columns < 2 || self.rows < 2 {
            return Err(WeftError::InvalidMesh(format!(
                "Grid must be at least 2x2, got {}x{}",
                self.columns, self.rows
            )));
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(WeftError::InvalidMesh(format!(
                "Grid spacing must be positive and finite, got {}",
                self.spacing
            )));
        }
        if self.origin.iter().any(|c| !c.is_finite()) {
            return Err(WeftError::InvalidMesh("Grid origin is not finite".into()));
        }
        if let PinPattern::Indices(indices) = &self.pins {
            let n = self.point_count();
            if let Some(&bad) = indices.iter().find(|&&i| i as usize >= n) {
                return Err(WeftError::InvalidMesh(format!(
                    "Pin index {} is out of range (point count: {})",
                    bad, n
                )));
            }
        }
        Ok(())
    }

    /// Expands the pin pattern into a per-point flag array.
    pub fn pinned_flags(&self) -> Vec<bool> {
        let mut pinned = vec![false; self.point_count()];
        match &self.pins {
            PinPattern::None => {}
            PinPattern::TopCorners => {
                pinned[0] = true;
                pinned[self.columns - 1] = true;
            }
            PinPattern::TopEdge => {
                for flag in pinned.iter_mut().take(self.columns) {
                    *flag = true;
                }
            }
            PinPattern::Indices(indices) => {
                for &i in indices {
                    if let Some(flag) = pinned.get_mut(i as usize) {
                        *flag = true;
                    }
                }
            }
        }
        pinned
    }
}
