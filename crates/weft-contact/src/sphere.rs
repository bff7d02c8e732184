//! Analytical sphere shape.

use weft_math::Vec3;
use weft_types::constants::EPSILON;

use crate::shape::{Contact, RigidShape};

/// Solid sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereShape {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: f32,
}

impl SphereShape {
    /// Creates a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl RigidShape for SphereShape {
    fn contains(&self, point: Vec3) -> bool {
        (point - self.center).length_squared() < self.radius * self.radius
    }

    fn contact(&self, point: Vec3) -> Option<Contact> {
        let offset = point - self.center;
        let dist2 = offset.length_squared();
        if dist2 >= self.radius * self.radius {
            return None;
        }

        let dist = dist2.sqrt();
        if dist <= EPSILON {
            // Direction from the center is undefined.
            return None;
        }

        let normal = offset / dist;
        Some(Contact {
            surface_point: self.center + normal * self.radius,
            normal,
            depth: self.radius - dist,
        })
    }

    fn translate(&mut self, offset: Vec3) {
        self.center += offset;
    }

    fn name(&self) -> &str {
        "sphere"
    }
}
