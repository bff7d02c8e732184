//! # weft-engine
//!
//! Frame-level orchestration for weft.
//!
//! ## Key Types
//!
//! - [`PhysicsEngine`] — Owns cloths and shapes; `update_physics` once per frame
//! - [`TimestepPolicy`] — Variable or fixed-substep frame timing
//! - [`SimulationConfig`] — TOML scene description that builds an engine

pub mod config;
pub mod engine;
pub mod timestep;

pub use config::{ClothEntry, SimulationConfig};
pub use engine::{FrameReport, PhysicsEngine};
pub use timestep::{FrameClock, FramePlan, TimestepPolicy};
