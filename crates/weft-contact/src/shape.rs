//! Rigid shape capability and contact data.

use weft_math::Vec3;

/// A point-vs-shape contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Closest point on the shape surface.
    pub surface_point: Vec3,
    /// Outward unit surface normal at `surface_point`.
    pub normal: Vec3,
    /// Penetration depth (positive inside the shape).
    pub depth: f32,
}

/// Collidable rigid geometry.
///
/// # Implementations
/// - [`SphereShape`](crate::sphere::SphereShape)
/// - [`GroundPlane`](crate::ground_plane::GroundPlane)
/// - [`BoxShape`](crate::box_shape::BoxShape)
pub trait RigidShape: Send + Sync {
    /// Returns true if `point` lies strictly inside the shape.
    fn contains(&self, point: Vec3) -> bool;

    /// Contact data for a penetrating point.
    ///
    /// Returns `None` when the point is outside, or when the shape cannot
    /// produce a valid normal there (e.g. the exact center of a sphere).
    /// Callers treat `None` as "no collision this step".
    fn contact(&self, point: Vec3) -> Option<Contact>;

    /// Moves the shape rigidly. Only the orchestrator calls this,
    /// between steps.
    fn translate(&mut self, offset: Vec3);

    /// Returns the shape's name.
    fn name(&self) -> &str;
}
