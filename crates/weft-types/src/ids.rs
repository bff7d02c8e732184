//! Strongly-typed identifiers for simulation entities.
//!
//! Points live in an arena owned by the cloth; springs and faces refer
//! to them by `PointId`. Newtypes keep point, face, and shape indices
//! from being mixed up.

use serde::{Deserialize, Serialize};

/// Index into a cloth's point-mass arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub u32);

/// Index into a cloth's face list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceId(pub u32);

/// Index into a cloth's spring network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpringId(pub u32);

/// Handle to a rigid shape registered with the physics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub u32);

/// Handle to a cloth registered with the physics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClothId(pub u32);

macro_rules! impl_index {
    ($($ty:ident),*) => {
        $(
            impl $ty {
                /// Returns the raw index as `usize` for slice indexing.
                #[inline]
                pub fn index(self) -> usize {
                    self.0 as usize
                }
            }

            impl From<u32> for $ty {
                fn from(val: u32) -> Self {
                    Self(val)
                }
            }
        )*
    };
}

impl_index!(PointId, FaceId, SpringId, ShapeId, ClothId);
