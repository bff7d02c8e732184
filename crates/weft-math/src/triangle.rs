//! Standalone collision triangle.
//!
//! A `Triangle` is a value snapshot of three corner positions plus a
//! normal. Collision and surface queries work on these snapshots so they
//! never have to walk the live particle graph.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::normal::triangle_normal;

/// Three positions and a unit normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub p1: Vec3,
    pub p2: Vec3,
    pub p3: Vec3,
    pub normal: Vec3,
}

impl Triangle {
    /// Creates a triangle, deriving the normal from the corners.
    ///
    /// Degenerate corners fall back to `fallback_normal`.
    pub fn new(p1: Vec3, p2: Vec3, p3: Vec3, fallback_normal: Vec3) -> Self {
        let normal = triangle_normal(p1, p2, p3).unwrap_or(fallback_normal);
        Self { p1, p2, p3, normal }
    }

    /// Returns the corners as an array.
    #[inline]
    pub fn corners(&self) -> [Vec3; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Triangle area: half the magnitude of the edge cross product.
    pub fn area(&self) -> f32 {
        0.5 * (self.p2 - self.p1).cross(self.p3 - self.p1).length()
    }

    /// Centroid (average of the three corners).
    pub fn centroid(&self) -> Vec3 {
        (self.p1 + self.p2 + self.p3) / 3.0
    }

    /// Signed distance from `point` to the triangle's supporting plane,
    /// positive on the side the normal points to.
    pub fn plane_distance(&self, point: Vec3) -> f32 {
        (point - self.p1).dot(self.normal)
    }

    /// Closest point on the triangle to `point`.
    ///
    /// Voronoi-region walk (Ericson, *Real-Time Collision Detection* §5.1.5).
    /// Works for degenerate triangles too, returning a point on the
    /// collapsed edge or vertex.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let (a, b, c) = (self.p1, self.p2, self.p3);
        let ab = b - a;
        let ac = c - a;
        let ap = point - a;

        let d1 = ab.dot(ap);
        let d2 = ac.dot(ap);
        if d1 <= 0.0 && d2 <= 0.0 {
            return a;
        }

        let bp = point - b;
        let d3 = ab.dot(bp);
        let d4 = ac.dot(bp);
        if d3 >= 0.0 && d4 <= d3 {
            return b;
        }

        let vc = d1 * d4 - d3 * d2;
        if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
            let v = d1 / (d1 - d3);
            return a + ab * v;
        }

        let cp = point - c;
        let d5 = ab.dot(cp);
        let d6 = ac.dot(cp);
        if d6 >= 0.0 && d5 <= d6 {
            return c;
        }

        let vb = d5 * d2 - d1 * d6;
        if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
            let w = d2 / (d2 - d6);
            return a + ac * w;
        }

        let va = d3 * d6 - d5 * d4;
        if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return b + (c - b) * w;
        }

        let denom = va + vb + vc;
        if denom.abs() <= f32::EPSILON {
            // Colinear corners that slipped past the edge tests.
            return a;
        }
        let inv = 1.0 / denom;
        let v = vb * inv;
        let w = vc * inv;
        a + ab * v + ac * w
    }
}
