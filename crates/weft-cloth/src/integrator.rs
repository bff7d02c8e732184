//! Time integration strategies.
//!
//! An integrator advances every free point from its accumulated force.
//! It never clears force accumulators; the cloth does that at the start
//! of each step.

use serde::{Deserialize, Serialize};

use crate::point_mass::PointMass;

/// Pluggable time-stepping strategy over a point-mass set.
///
/// # Implementations
/// - [`SemiImplicitEuler`] — default
/// - [`Verlet`] — position Verlet with time correction
pub trait Integrator: Send {
    /// Advances every non-immovable point by `dt` seconds.
    fn solve(&mut self, points: &mut [PointMass], dt: f32);

    /// Returns the integrator's name.
    fn name(&self) -> &str;
}

/// Selects an integrator from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegratorKind {
    #[default]
    SemiImplicitEuler,
    Verlet,
}

impl IntegratorKind {
    /// Constructs the selected integrator.
    pub fn build(self) -> Box<dyn Integrator> {
        match self {
            IntegratorKind::SemiImplicitEuler => Box::new(SemiImplicitEuler),
            IntegratorKind::Verlet => Box::new(Verlet::new()),
        }
    }
}

/// Symplectic Euler: `v += (F/m)·dt`, then `x += v·dt`.
///
/// The position update uses the *new* velocity. Swapping the two lines
/// yields explicit Euler, which gains energy on spring systems.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn solve(&mut self, points: &mut [PointMass], dt: f32) {
        for p in points.iter_mut() {
            p.previous_position = p.position;
            if p.is_immovable() {
                continue;
            }
            p.velocity += p.acceleration() * dt;
            p.position += p.velocity * dt;
        }
    }

    fn name(&self) -> &str {
        "semi_implicit_euler"
    }
}

/// Time-corrected position Verlet.
///
/// `x' = x + (x - x_prev)·(dt / dt_prev) + a·dt²`, with velocity
/// recovered as `(x' - x) / dt`. Momentum is carried by
/// `previous_position`, so anything that teleports a point (collision
/// response, pinning) must keep `previous_position` consistent with its
/// velocity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verlet {
    last_dt: Option<f32>,
}

impl Verlet {
    pub fn new() -> Self {
        Self { last_dt: None }
    }
}

impl Integrator for Verlet {
    fn solve(&mut self, points: &mut [PointMass], dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let ratio = self.last_dt.map_or(1.0, |prev| dt / prev);

        for p in points.iter_mut() {
            if p.is_immovable() {
                p.previous_position = p.position;
                continue;
            }
            let current = p.position;
            let next = current + (current - p.previous_position) * ratio + p.acceleration() * (dt * dt);
            p.previous_position = current;
            p.position = next;
            p.velocity = (next - current) / dt;
        }

        self.last_dt = Some(dt);
    }

    fn name(&self) -> &str {
        "verlet"
    }
}
