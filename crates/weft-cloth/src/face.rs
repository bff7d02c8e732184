//! Triangular face over three points.
//!
//! A face derives its geometric normal from the live corner positions,
//! feeds that normal to its corners' shading accumulators, and keeps a
//! standalone [`Triangle`] snapshot for collision and surface queries.

use weft_math::{triangle_normal, Triangle, Vec3};
use weft_types::{FaceId, PointId, WeftError, WeftResult};

use crate::point_mass::PointMass;

/// Triangle face of the cloth.
#[derive(Debug, Clone)]
pub struct Face {
    id: FaceId,
    corners: [PointId; 3],
    normal: Vec3,
    triangle: Triangle,
}

impl Face {
    /// Normal given to a face that is degenerate from the start.
    pub const FALLBACK_NORMAL: Vec3 = Vec3::Z;

    /// Creates a face over three distinct, existing points.
    ///
    /// Corner order is the winding order and decides the normal's sign.
    pub fn new(id: FaceId, corners: [PointId; 3], points: &[PointMass]) -> WeftResult<Self> {
        let [a, b, c] = corners;
        if a == b || b == c || a == c {
            return Err(WeftError::InvalidMesh(format!(
                "Face {} has repeated corners: [{}, {}, {}]",
                id.0, a.0, b.0, c.0
            )));
        }
        if let Some(bad) = corners.iter().find(|p| p.index() >= points.len()) {
            return Err(WeftError::InvalidMesh(format!(
                "Face {} references point {} (point count: {})",
                id.0,
                bad.0,
                points.len()
            )));
        }

        let [p1, p2, p3] = corners.map(|p| points[p.index()].position);
        let triangle = Triangle::new(p1, p2, p3, Self::FALLBACK_NORMAL);
        Ok(Self {
            id,
            corners,
            normal: triangle.normal,
            triangle,
        })
    }

    #[inline]
    pub fn id(&self) -> FaceId {
        self.id
    }

    #[inline]
    pub fn corners(&self) -> [PointId; 3] {
        self.corners
    }

    /// Unit normal as of the last [`update`](Self::update).
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Collision snapshot as of the last [`update`](Self::update).
    #[inline]
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    /// `normalize((p2 - p1) × (p3 - p1))`, or `previous` for degenerate corners.
    #[inline]
    pub fn normal_of(p1: Vec3, p2: Vec3, p3: Vec3, previous: Vec3) -> Vec3 {
        triangle_normal(p1, p2, p3).unwrap_or(previous)
    }

    /// Recomputes the normal from current corner positions.
    ///
    /// Returns `false` if the corners are degenerate, in which case the
    /// previous normal is kept.
    pub fn calc_normal(&mut self, points: &[PointMass]) -> bool {
        let [p1, p2, p3] = self.corners.map(|p| points[p.index()].position);
        match triangle_normal(p1, p2, p3) {
            Some(n) => {
                self.normal = n;
                true
            }
            None => false,
        }
    }

    /// Recomputes the normal, then refreshes the collision triangle.
    ///
    /// Returns `false` if the face was degenerate this frame.
    pub fn update(&mut self, points: &[PointMass]) -> bool {
        let ok = self.calc_normal(points);
        let [p1, p2, p3] = self.corners.map(|p| points[p.index()].position);
        self.triangle = Triangle {
            p1,
            p2,
            p3,
            normal: self.normal,
        };
        ok
    }

    /// Pushes the face normal into each corner's accumulator.
    /// Must follow [`update`](Self::update) in the same frame.
    pub fn update_point_normals(&self, points: &mut [PointMass]) {
        for p in self.corners {
            points[p.index()].add_normal(self.normal);
        }
    }

    /// Area of the collision snapshot.
    pub fn area(&self) -> f32 {
        self.triangle.area()
    }
}
