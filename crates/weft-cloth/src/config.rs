//! Cloth configuration.
//!
//! Physical parameters of one cloth: external forces, point mass,
//! per-category spring coefficients, contact response, and the
//! integrator to step with.

use serde::{Deserialize, Serialize};
use weft_contact::ContactParams;
use weft_math::Vec3;
use weft_types::constants::{DEFAULT_POINT_MASS, GRAVITY};
use weft_types::{WeftError, WeftResult};

use crate::integrator::IntegratorKind;
use crate::spring::SpringKind;

/// Coefficients for one spring category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringParams {
    /// Whether springs of this category are built at all.
    #[serde(default = "enabled")]
    pub enabled: bool,
    /// Hooke stiffness (N/m).
    pub stiffness: f32,
    /// Damping along the spring axis (N·s/m).
    pub damping: f32,
}

fn enabled() -> bool {
    true
}

impl SpringParams {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            enabled: true,
            stiffness,
            damping,
        }
    }

    /// Same coefficients, but the category is not built.
    pub fn disabled(self) -> Self {
        Self {
            enabled: false,
            ..self
        }
    }
}

/// Named [`ClothConfig`] presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClothPreset {
    #[default]
    Default,
    Silk,
    Canvas,
    Ballistic,
}

impl ClothPreset {
    pub fn config(self) -> ClothConfig {
        match self {
            ClothPreset::Default => ClothConfig::default(),
            ClothPreset::Silk => ClothConfig::silk(),
            ClothPreset::Canvas => ClothConfig::canvas(),
            ClothPreset::Ballistic => ClothConfig::ballistic(),
        }
    }
}

/// Configuration for a single cloth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothConfig {
    /// Gravitational acceleration [gx, gy, gz] in m/s².
    pub gravity: [f32; 3],

    /// Uniform wind force [fx, fy, fz] in N, applied to every free point.
    pub wind: [f32; 3],

    /// Mass of every point (kg).
    pub point_mass: f32,

    pub structural: SpringParams,
    pub shear: SpringParams,
    pub bend: SpringParams,

    /// Collision velocity response.
    pub contact: ContactParams,

    /// Time-stepping strategy.
    pub integrator: IntegratorKind,
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -GRAVITY, 0.0],
            wind: [0.0; 3],
            point_mass: DEFAULT_POINT_MASS,
            structural: SpringParams::new(80.0, 0.1),
            shear: SpringParams::new(40.0, 0.05),
            bend: SpringParams::new(20.0, 0.02),
            contact: ContactParams::default(),
            integrator: IntegratorKind::default(),
        }
    }
}

impl ClothConfig {
    /// Light, loosely bending fabric.
    pub fn silk() -> Self {
        Self {
            point_mass: 0.05,
            structural: SpringParams::new(40.0, 0.05),
            shear: SpringParams::new(15.0, 0.02),
            bend: SpringParams::new(2.0, 0.005),
            ..Default::default()
        }
    }

    /// Heavy fabric that resists folding.
    pub fn canvas() -> Self {
        Self {
            point_mass: 0.2,
            structural: SpringParams::new(160.0, 0.2),
            shear: SpringParams::new(100.0, 0.1),
            bend: SpringParams::new(80.0, 0.05),
            contact: ContactParams {
                restitution: 0.0,
                friction: 0.3,
            },
            ..Default::default()
        }
    }

    /// No springs at all: every point falls independently.
    pub fn ballistic() -> Self {
        let base = Self::default();
        Self {
            structural: base.structural.disabled(),
            shear: base.shear.disabled(),
            bend: base.bend.disabled(),
            ..base
        }
    }

    /// Coefficients for one spring category.
    pub fn spring_params(&self, kind: SpringKind) -> &SpringParams {
        match kind {
            SpringKind::Structural => &self.structural,
            SpringKind::Shear => &self.shear,
            SpringKind::Bend => &self.bend,
        }
    }

    pub fn gravity_vec(&self) -> Vec3 {
        Vec3::from_array(self.gravity)
    }

    pub fn wind_vec(&self) -> Vec3 {
        Vec3::from_array(self.wind)
    }

    /// Checks that every parameter is finite and in range.
    pub fn validate(&self) -> WeftResult<()> {
        let vectors = [("gravity", self.gravity), ("wind", self.wind)];
        for (name, v) in vectors {
            if v.iter().any(|c| !c.is_finite()) {
                return Err(WeftError::InvalidConfig(format!("{name} must be finite: {v:?}")));
            }
        }

        if !(self.point_mass.is_finite() && self.point_mass > 0.0) {
            return Err(WeftError::InvalidConfig(format!(
                "point_mass must be positive, got {}",
                self.point_mass
            )));
        }

        for kind in SpringKind::ALL {
            let p = self.spring_params(kind);
            if !(p.stiffness.is_finite() && p.stiffness >= 0.0) {
                return Err(WeftError::InvalidConfig(format!(
                    "{kind:?} stiffness must be non-negative, got {}",
                    p.stiffness
                )));
            }
            if !(p.damping.is_finite() && p.damping >= 0.0) {
                return Err(WeftError::InvalidConfig(format!(
                    "{kind:?} damping must be non-negative, got {}",
                    p.damping
                )));
            }
        }

        let unit = 0.0..=1.0;
        if !unit.contains(&self.contact.restitution) {
            return Err(WeftError::InvalidConfig(format!(
                "restitution must be in [0, 1], got {}",
                self.contact.restitution
            )));
        }
        if !unit.contains(&self.contact.friction) {
            return Err(WeftError::InvalidConfig(format!(
                "friction must be in [0, 1], got {}",
                self.contact.friction
            )));
        }

        Ok(())
    }
}
