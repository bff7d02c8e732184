//! Benchmark scenarios: grid, pinning, physics, and obstacles for each case.
//!
//! Three canonical scenarios for regression testing:
//! 1. **Hanging sheet**: cloth pinned along one edge, drapes under gravity
//! 2. **Sphere drape**: free cloth falls onto a sphere
//! 3. **Pinned corners**: cloth held by its two top corners swings and sags

use serde::{Deserialize, Serialize};

use weft_cloth::ClothConfig;
use weft_contact::ShapeConfig;
use weft_engine::{ClothEntry, PhysicsEngine, SimulationConfig, TimestepPolicy};
use weft_mesh::{GridPlane, GridSpec, PinPattern};
use weft_types::constants::DEFAULT_DT;
use weft_types::WeftResult;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Cloth pinned along its top edge, hanging under gravity.
    HangingSheet,
    /// Cloth draped over a sphere.
    SphereDrape,
    /// Cloth held by two corners.
    PinnedCorners,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::HangingSheet,
            ScenarioKind::SphereDrape,
            ScenarioKind::PinnedCorners,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::HangingSheet => "hanging_sheet",
            ScenarioKind::SphereDrape => "sphere_drape",
            ScenarioKind::PinnedCorners => "pinned_corners",
        }
    }

    /// Looks a kind up by [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<ScenarioKind> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Cloth layout and pinning.
    pub grid: GridSpec,
    /// Cloth physics.
    pub cloth: ClothConfig,
    /// Obstacles.
    pub shapes: Vec<ShapeConfig>,
    /// Frame timing policy.
    pub policy: TimestepPolicy,
    /// Number of frames to simulate.
    pub frames: u32,
    /// Frame delta (seconds).
    pub dt: f32,
}

impl Scenario {
    /// Create the hanging sheet scenario.
    ///
    /// A 1m × 1m cloth at 20×20 resolution lying flat at Y = 1, pinned
    /// along one edge, swinging down for 2 seconds at 60fps.
    pub fn hanging_sheet() -> Self {
        let spacing = 1.0 / 19.0;
        Self {
            kind: ScenarioKind::HangingSheet,
            grid: GridSpec {
                columns: 20,
                rows: 20,
                spacing,
                origin: [-0.5, 1.0, -0.5],
                plane: GridPlane::Xz,
                pins: PinPattern::TopEdge,
            },
            cloth: ClothConfig::default(),
            shapes: Vec::new(),
            policy: TimestepPolicy::Variable,
            frames: 120, // 2 seconds at 60fps
            dt: DEFAULT_DT,
        }
    }

    /// Create the sphere drape scenario.
    ///
    /// A 1.5m × 1.5m cloth at 20×20 resolution falls onto a sphere of
    /// radius 0.3m centered at the origin.
    pub fn sphere_drape() -> Self {
        let spacing = 1.5 / 19.0;
        Self {
            kind: ScenarioKind::SphereDrape,
            grid: GridSpec {
                columns: 20,
                rows: 20,
                spacing,
                origin: [-0.75, 0.5, -0.75],
                plane: GridPlane::Xz,
                pins: PinPattern::None, // Nothing pinned, free fall
            },
            cloth: ClothConfig::default(),
            shapes: vec![ShapeConfig::Sphere {
                center: [0.0, 0.0, 0.0],
                radius: 0.3,
            }],
            policy: TimestepPolicy::fixed(1.0 / 240.0),
            frames: 180, // 3 seconds
            dt: DEFAULT_DT,
        }
    }

    /// Create the pinned corners scenario.
    ///
    /// A 1m × 0.5m vertical cloth held by its two top corners.
    pub fn pinned_corners() -> Self {
        let spacing = 1.0 / 19.0;
        Self {
            kind: ScenarioKind::PinnedCorners,
            grid: GridSpec {
                columns: 20,
                rows: 10,
                spacing,
                origin: [-0.5, 1.0, 0.0],
                plane: GridPlane::Xy,
                pins: PinPattern::TopCorners,
            },
            cloth: ClothConfig::default(),
            shapes: Vec::new(),
            policy: TimestepPolicy::Variable,
            frames: 120,
            dt: DEFAULT_DT,
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::HangingSheet => Self::hanging_sheet(),
            ScenarioKind::SphereDrape => Self::sphere_drape(),
            ScenarioKind::PinnedCorners => Self::pinned_corners(),
        }
    }

    /// Replaces the cloth physics.
    pub fn with_cloth(mut self, cloth: ClothConfig) -> Self {
        self.cloth = cloth;
        self
    }

    /// The scenario as a scene description.
    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            duration: self.frames as f32 * self.dt,
            frame_dt: self.dt,
            timestep: self.policy,
            cloths: vec![ClothEntry {
                grid: self.grid.clone(),
                physics: Some(self.cloth.clone()),
                ..Default::default()
            }],
            shapes: self.shapes.clone(),
        }
    }

    /// Builds a ready-to-run engine.
    pub fn build_engine(&self) -> WeftResult<PhysicsEngine> {
        self.simulation_config().build_engine()
    }
}
