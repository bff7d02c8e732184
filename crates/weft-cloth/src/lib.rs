//! # weft-cloth
//!
//! Mass-spring cloth: point masses joined by springs, surfaced by
//! triangle faces, advanced by a pluggable integrator.
//!
//! ## Key Types
//!
//! - [`ClothSystem`] — Owns one cloth and runs its per-step pipeline
//! - [`PointMass`] — Arena-allocated particle, addressed by `PointId`
//! - [`SpringNetwork`] — Structural, shear, and bend springs
//! - [`Face`] — Triangle over three points; normals and collision triangle
//! - [`Integrator`] — Time-stepping strategy trait
//! - [`ClothConfig`] — Physical parameters and presets

pub mod cloth;
pub mod config;
pub mod face;
pub mod integrator;
pub mod point_mass;
pub mod spring;

pub use cloth::{ClothSystem, StepReport, SurfaceHit};
pub use config::{ClothConfig, ClothPreset, SpringParams};
pub use face::Face;
pub use integrator::{Integrator, IntegratorKind, SemiImplicitEuler, Verlet};
pub use point_mass::PointMass;
pub use spring::{Spring, SpringKind, SpringNetwork};
