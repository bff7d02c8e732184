//! Ground plane shape.
//!
//! A horizontal half-space occupying everything below `y = height`.

use weft_math::Vec3;

use crate::shape::{Contact, RigidShape};

/// Ground plane at a fixed Y height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    /// Height of the ground plane (Y coordinate).
    pub height: f32,
}

impl GroundPlane {
    /// Creates a new ground plane at the given height.
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl RigidShape for GroundPlane {
    fn contains(&self, point: Vec3) -> bool {
        point.y < self.height
    }

    fn contact(&self, point: Vec3) -> Option<Contact> {
        let depth = self.height - point.y;
        if depth <= 0.0 {
            return None;
        }
        Some(Contact {
            surface_point: Vec3::new(point.x, self.height, point.z),
            normal: Vec3::Y,
            depth,
        })
    }

    fn translate(&mut self, offset: Vec3) {
        self.height += offset.y;
    }

    fn name(&self) -> &str {
        "ground_plane"
    }
}
