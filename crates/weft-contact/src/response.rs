//! Point contact response.
//!
//! Projects a penetrating point onto the shape surface and fixes up its
//! velocity along the contact normal.

use serde::{Deserialize, Serialize};
use weft_math::Vec3;

use crate::shape::Contact;

/// Velocity response parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactParams {
    /// Fraction of inward normal speed reflected back out (0 = inelastic).
    pub restitution: f32,
    /// Fraction of tangential speed removed on contact (0 = frictionless).
    pub friction: f32,
}

impl Default for ContactParams {
    fn default() -> Self {
        Self {
            restitution: 0.0,
            friction: 0.0,
        }
    }
}

/// Aggregate statistics for one collision pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactResult {
    /// Number of contacts resolved.
    pub resolved_count: u32,
    /// Deepest penetration resolved (meters).
    pub max_penetration: f32,
    /// Sum of all resolved depths.
    pub total_depth: f32,
}

impl ContactResult {
    /// Records one resolved contact.
    pub fn record(&mut self, depth: f32) {
        self.resolved_count += 1;
        self.max_penetration = self.max_penetration.max(depth);
        self.total_depth += depth;
    }

    /// Folds another pass's statistics into this one.
    pub fn merge(&mut self, other: &ContactResult) {
        self.resolved_count += other.resolved_count;
        self.max_penetration = self.max_penetration.max(other.max_penetration);
        self.total_depth += other.total_depth;
    }
}

/// Resolves one contact in place.
///
/// The position moves to `contact.surface_point`. The velocity loses its
/// component along `contact.normal`; if that component pointed into the
/// shape, `restitution` of it is reflected back out. Tangential velocity
/// is scaled by `1 - friction`.
pub fn respond(position: &mut Vec3, velocity: &mut Vec3, contact: &Contact, params: &ContactParams) {
    *position = contact.surface_point;

    let n = contact.normal;
    let v_n = velocity.dot(n);
    let tangent = *velocity - n * v_n;

    let bounce = if v_n < 0.0 { -v_n * params.restitution } else { 0.0 };
    *velocity = tangent * (1.0 - params.friction) + n * bounce;
}
