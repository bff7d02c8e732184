//! Simulated particle.

use weft_math::{normalize_or, Vec3};
use weft_types::{PointId, WeftError, WeftResult};

/// A single mass point of the cloth.
///
/// Points live in an arena (`Vec<PointMass>`) owned by the cloth and are
/// addressed by [`PointId`]. Equality is identity: two points are equal
/// only if they carry the same id, whatever their state.
#[derive(Debug, Clone)]
pub struct PointMass {
    id: PointId,

    /// Current position.
    pub position: Vec3,
    /// Position at the start of the last integration.
    pub previous_position: Vec3,
    /// Current velocity.
    pub velocity: Vec3,
    /// Whether collision resolution considers this point.
    pub collides: bool,

    mass: f32,
    inv_mass: f32,
    force_accum: Vec3,

    normal_accum: Vec3,
    normal_count: u32,
    point_normal: Vec3,

    immovable: bool,
    anchor: Vec3,
}

impl PointMass {
    /// Creates a point at rest.
    ///
    /// Fails if `mass` is zero, negative, or non-finite.
    pub fn new(id: PointId, mass: f32, position: Vec3, immovable: bool) -> WeftResult<Self> {
        check_mass(id, mass)?;
        Ok(Self {
            id,
            position,
            previous_position: position,
            velocity: Vec3::ZERO,
            collides: true,
            mass,
            inv_mass: 1.0 / mass,
            force_accum: Vec3::ZERO,
            normal_accum: Vec3::ZERO,
            normal_count: 0,
            point_normal: Vec3::ZERO,
            immovable,
            anchor: position,
        })
    }

    #[inline]
    pub fn id(&self) -> PointId {
        self.id
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Changes the mass. Same validation as [`PointMass::new`].
    pub fn set_mass(&mut self, mass: f32) -> WeftResult<()> {
        check_mass(self.id, mass)?;
        self.mass = mass;
        self.inv_mass = 1.0 / mass;
        Ok(())
    }

    // ─── Forces ───────────────────────────────────────────────

    /// Adds `force` to the accumulator.
    ///
    /// Immovable points accumulate too; integration ignores them.
    #[inline]
    pub fn add_force(&mut self, force: Vec3) {
        self.force_accum += force;
    }

    /// Zeroes the force accumulator.
    #[inline]
    pub fn clear_accum(&mut self) {
        self.force_accum = Vec3::ZERO;
    }

    /// Accumulated force for this step.
    #[inline]
    pub fn force(&self) -> Vec3 {
        self.force_accum
    }

    /// Acceleration implied by the accumulated force.
    #[inline]
    pub fn acceleration(&self) -> Vec3 {
        self.force_accum * self.inv_mass
    }

    // ─── Normals ──────────────────────────────────────────────

    /// Adds one adjacent face normal.
    #[inline]
    pub fn add_normal(&mut self, normal: Vec3) {
        self.normal_accum += normal;
        self.normal_count += 1;
    }

    /// Resets the normal accumulator for a new pass.
    #[inline]
    pub fn clear_normals(&mut self) {
        self.normal_accum = Vec3::ZERO;
        self.normal_count = 0;
    }

    /// Number of face normals accumulated this pass.
    #[inline]
    pub fn normal_count(&self) -> u32 {
        self.normal_count
    }

    /// Averages the accumulated normals into the point normal and returns it.
    ///
    /// With nothing accumulated, or if the face normals cancel out, the
    /// previous point normal is kept.
    pub fn calculate_point_normal(&mut self) -> Vec3 {
        if self.normal_count > 0 {
            let average = self.normal_accum / self.normal_count as f32;
            self.point_normal = normalize_or(average, self.point_normal);
        }
        self.point_normal
    }

    /// Shading normal from the last [`calculate_point_normal`](Self::calculate_point_normal).
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.point_normal
    }

    // ─── Pinning ──────────────────────────────────────────────

    #[inline]
    pub fn is_immovable(&self) -> bool {
        self.immovable
    }

    /// Pins or releases the point. Pinning anchors it at its current
    /// position and brings it to rest.
    pub fn set_immovable(&mut self, immovable: bool) {
        if immovable && !self.immovable {
            self.anchor = self.position;
            self.previous_position = self.position;
            self.velocity = Vec3::ZERO;
        }
        self.immovable = immovable;
    }

    /// Position a pinned point is held at.
    #[inline]
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// Snaps a pinned point back to its anchor. No-op for free points.
    pub fn enforce_pin(&mut self) {
        if self.immovable {
            self.position = self.anchor;
            self.previous_position = self.anchor;
            self.velocity = Vec3::ZERO;
        }
    }

    /// Kinetic energy `½·m·|v|²`.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass as f64 * self.velocity.length_squared() as f64
    }
}

impl PartialEq for PointMass {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PointMass {}

fn check_mass(id: PointId, mass: f32) -> WeftResult<()> {
    if mass.is_finite() && mass > 0.0 {
        Ok(())
    } else {
        Err(WeftError::InvalidMass { point: id.0, mass })
    }
}
