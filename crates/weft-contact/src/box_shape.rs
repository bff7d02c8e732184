//! Axis-aligned box shape.
//!
//! Penetrating points are pushed out through the nearest face.

use weft_math::Vec3;

use crate::shape::{Contact, RigidShape};

/// Solid axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoxShape {
    /// Creates a box from its corner bounds.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates a box from its center and half extents.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }
}

impl RigidShape for BoxShape {
    fn contains(&self, p: Vec3) -> bool {
        p.cmpgt(self.min).all() && p.cmplt(self.max).all()
    }

    fn contact(&self, p: Vec3) -> Option<Contact> {
        if !self.contains(p) {
            return None;
        }

        // Distance to each face, paired with its outward normal.
        // Ties resolve in this order, so a point equidistant from the
        // top and a side face leaves through the top.
        let faces = [
            (self.max.y - p.y, Vec3::Y),
            (p.y - self.min.y, -Vec3::Y),
            (self.max.x - p.x, Vec3::X),
            (p.x - self.min.x, -Vec3::X),
            (self.max.z - p.z, Vec3::Z),
            (p.z - self.min.z, -Vec3::Z),
        ];
        let (depth, normal) = faces
            .into_iter()
            .fold(faces[0], |best, face| if face.0 < best.0 { face } else { best });

        Some(Contact {
            surface_point: p + normal * depth,
            normal,
            depth,
        })
    }

    fn translate(&mut self, offset: Vec3) {
        self.min += offset;
        self.max += offset;
    }

    fn name(&self) -> &str {
        "box"
    }
}
