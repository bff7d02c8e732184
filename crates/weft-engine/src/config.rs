//! Simulation configuration loaded from TOML.
//!
//! A `SimulationConfig` describes a whole scene: how long to run, the
//! frame delta and timestep policy, every cloth (grid plus physics), and
//! every rigid shape.
//!
//! ```toml
//! duration = 2.0
//! frame_dt = 0.016666668
//!
//! [timestep]
//! mode = "fixed_substep"
//! step = 0.004166667
//! max_substeps = 8
//!
//! [[cloths]]
//! preset = "silk"
//! [cloths.grid]
//! columns = 20
//! rows = 20
//! spacing = 0.05
//! origin = [-0.5, 0.5, 0.0]
//! pins = "top_corners"
//!
//! [[shapes]]
//! type = "sphere"
//! center = [0.0, -0.2, 0.0]
//! radius = 0.25
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use weft_cloth::{ClothConfig, ClothPreset, ClothSystem};
use weft_contact::ShapeConfig;
use weft_mesh::GridSpec;
use weft_types::constants::DEFAULT_DT;
use weft_types::{WeftError, WeftResult};

use crate::engine::PhysicsEngine;
use crate::timestep::TimestepPolicy;

/// One cloth of the scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClothEntry {
    #[serde(default)]
    pub grid: GridSpec,
    /// Base physics when `physics` is absent.
    #[serde(default)]
    pub preset: ClothPreset,
    /// Explicit physics; overrides `preset` entirely.
    #[serde(default)]
    pub physics: Option<ClothConfig>,
}

impl ClothEntry {
    /// Physics this cloth is built with.
    pub fn resolved_config(&self) -> ClothConfig {
        self.physics.clone().unwrap_or_else(|| self.preset.config())
    }
}

/// Complete scene description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Simulated duration (seconds).
    pub duration: f32,
    /// Frame delta fed to `update_physics` (seconds).
    pub frame_dt: f32,
    pub timestep: TimestepPolicy,
    pub cloths: Vec<ClothEntry>,
    pub shapes: Vec<ShapeConfig>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            duration: 2.0,
            frame_dt: DEFAULT_DT,
            timestep: TimestepPolicy::default(),
            cloths: vec![ClothEntry::default()],
            shapes: Vec::new(),
        }
    }
}

impl SimulationConfig {
    /// Parses a TOML document and validates it.
    pub fn from_toml_str(text: &str) -> WeftResult<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| WeftError::Serialization(format!("TOML parse failed: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> WeftResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> WeftResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| WeftError::Serialization(format!("TOML serialization failed: {e}")))
    }

    /// Number of frames covering `duration`.
    pub fn frame_count(&self) -> u32 {
        (self.duration / self.frame_dt).ceil() as u32
    }

    pub fn validate(&self) -> WeftResult<()> {
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            return Err(WeftError::InvalidConfig(format!(
                "duration must be non-negative, got {}",
                self.duration
            )));
        }
        if !(self.frame_dt.is_finite() && self.frame_dt > 0.0) {
            return Err(WeftError::InvalidConfig(format!(
                "frame_dt must be positive, got {}",
                self.frame_dt
            )));
        }
        self.timestep.validate()?;

        if self.cloths.is_empty() {
            return Err(WeftError::InvalidConfig("Scene has no cloths".into()));
        }
        for (i, entry) in self.cloths.iter().enumerate() {
            entry
                .grid
                .validate()
                .map_err(|e| WeftError::InvalidConfig(format!("cloths[{i}].grid: {e}")))?;
            entry
                .resolved_config()
                .validate()
                .map_err(|e| WeftError::InvalidConfig(format!("cloths[{i}].physics: {e}")))?;
        }
        for (i, shape) in self.shapes.iter().enumerate() {
            shape
                .build()
                .map_err(|e| WeftError::InvalidConfig(format!("shapes[{i}]: {e}")))?;
        }
        Ok(())
    }

    /// Builds the engine with every cloth and shape registered.
    pub fn build_engine(&self) -> WeftResult<PhysicsEngine> {
        self.validate()?;
        let mut engine = PhysicsEngine::with_policy(self.timestep);
        for entry in &self.cloths {
            engine.add_cloth(ClothSystem::from_grid(&entry.grid, entry.resolved_config())?);
        }
        for shape in &self.shapes {
            engine.add_shape(shape.build()?);
        }
        Ok(engine)
    }
}
