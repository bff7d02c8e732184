//! Serializable shape descriptions.

use serde::{Deserialize, Serialize};
use weft_math::Vec3;
use weft_types::{WeftError, WeftResult};

use crate::box_shape::BoxShape;
use crate::ground_plane::GroundPlane;
use crate::shape::RigidShape;
use crate::sphere::SphereShape;

/// A rigid shape as written in a simulation config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeConfig {
    Sphere { center: [f32; 3], radius: f32 },
    GroundPlane { height: f32 },
    Box { min: [f32; 3], max: [f32; 3] },
}

impl ShapeConfig {
    /// Validates parameters and constructs the shape.
    pub fn build(&self) -> WeftResult<Box<dyn RigidShape>> {
        match *self {
            ShapeConfig::Sphere { center, radius } => {
                if !radius.is_finite() || radius <= 0.0 {
                    return Err(WeftError::InvalidConfig(format!(
                        "Sphere radius must be positive, got {radius}"
                    )));
                }
                check_finite("sphere center", &center)?;
                Ok(Box::new(SphereShape::new(Vec3::from(center), radius)))
            }
            ShapeConfig::GroundPlane { height } => {
                if !height.is_finite() {
                    return Err(WeftError::InvalidConfig(
                        "Ground plane height is not finite".into(),
                    ));
                }
                Ok(Box::new(GroundPlane::new(height)))
            }
            ShapeConfig::Box { min, max } => {
                check_finite("box min", &min)?;
                check_finite("box max", &max)?;
                let (min, max) = (Vec3::from(min), Vec3::from(max));
                if !min.cmplt(max).all() {
                    return Err(WeftError::InvalidConfig(format!(
                        "Box min {min} must be below max {max} on every axis"
                    )));
                }
                Ok(Box::new(BoxShape::new(min, max)))
            }
        }
    }
}

fn check_finite(what: &str, v: &[f32; 3]) -> WeftResult<()> {
    if v.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(WeftError::InvalidConfig(format!("{what} is not finite")))
    }
}
