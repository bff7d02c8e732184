//! Procedural cloth grid generation.
//!
//! Produces deterministic grid geometry with consistent winding and
//! UV coordinates spanning `[0, 1]` in both axes.

use glam::{Vec2, Vec3};

use crate::grid::{GridPlane, GridSpec};

/// Generated grid data, before validation.
pub struct GridGeometry {
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

/// Lays out `spec.columns × spec.rows` points and two triangles per quad.
///
/// Triangles wind counter-clockwise when seen from the face normal side
/// (+Z for [`GridPlane::Xy`], +Y for [`GridPlane::Xz`]).
///
/// # Example
/// ```
/// use weft_mesh::generators::grid_geometry;
/// use weft_mesh::GridSpec;
/// let g = grid_geometry(&GridSpec::square(3, 0.5));
/// assert_eq!(g.positions.len(), 9);   // 3×3 points
/// assert_eq!(g.indices.len() / 3, 8); // 2×2 quads × 2 tris each
/// ```
pub fn grid_geometry(spec: &GridSpec) -> GridGeometry {
    let cols = spec.columns;
    let rows = spec.rows;
    let origin = Vec3::from(spec.origin);

    let (across, down) = match spec.plane {
        GridPlane::Xy => (Vec3::X, -Vec3::Y),
        GridPlane::Xz => (Vec3::X, Vec3::Z),
    };

    let u_den = (cols.max(2) - 1) as f32;
    let v_den = (rows.max(2) - 1) as f32;

    let mut positions = Vec::with_capacity(cols * rows);
    let mut uvs = Vec::with_capacity(cols * rows);
    for j in 0..rows {
        for i in 0..cols {
            positions.push(
                origin + across * (i as f32 * spec.spacing) + down * (j as f32 * spec.spacing),
            );
            uvs.push(Vec2::new(i as f32 / u_den, j as f32 / v_den));
        }
    }

    let quads = cols.saturating_sub(1) * rows.saturating_sub(1);
    let mut indices = Vec::with_capacity(quads * 6);
    for j in 0..rows.saturating_sub(1) {
        for i in 0..cols.saturating_sub(1) {
            let top_left = (j * cols + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + cols as u32;
            let bot_right = bot_left + 1;

            // Upper-left triangle
            indices.extend_from_slice(&[top_left, bot_left, top_right]);
            // Lower-right triangle
            indices.extend_from_slice(&[top_right, bot_left, bot_right]);
        }
    }

    GridGeometry {
        positions,
        uvs,
        indices,
    }
}
