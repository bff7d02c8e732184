//! Simulation event types.
//!
//! Structured events emitted by the engine during each frame. Events are
//! lightweight value types carrying just enough data for monitoring and
//! debugging.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the engine.
///
/// Events are tagged with the engine's step index and carry
/// domain-specific data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Step number (0-indexed).
    pub timestep: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventKind {
    /// Step started.
    StepBegin {
        /// Simulation time at the start of the step (seconds).
        sim_time: f64,
        /// Timestep about to be applied (seconds).
        dt: f32,
    },

    /// Step completed.
    StepEnd {
        /// Wall-clock time for the whole step (seconds).
        wall_time: f64,
    },

    /// Collision pass of one cloth completed.
    Contacts {
        cloth: u32,
        /// Number of resolved point contacts.
        count: u32,
        /// Maximum penetration depth (meters).
        max_penetration: f32,
    },

    /// Energy snapshot of one cloth after the step.
    Energy {
        cloth: u32,
        /// Kinetic energy (0.5 * m * v^2).
        kinetic: f64,
        /// Gravitational potential energy.
        potential: f64,
        /// Energy stored in springs.
        elastic: f64,
    },

    /// Faces whose corners collapsed this step.
    DegenerateFaces { cloth: u32, count: u32 },

    /// Frame time exceeded the substep budget and was dropped.
    FrameClamped {
        /// Frame time handed to the engine (seconds).
        requested: f32,
        /// Time actually simulated (seconds).
        simulated: f32,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given step.
    pub fn new(timestep: u64, kind: EventKind) -> Self {
        Self { timestep, kind }
    }
}

impl EventKind {
    /// Short snake_case name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::StepBegin { .. } => "step_begin",
            EventKind::StepEnd { .. } => "step_end",
            EventKind::Contacts { .. } => "contacts",
            EventKind::Energy { .. } => "energy",
            EventKind::DegenerateFaces { .. } => "degenerate_faces",
            EventKind::FrameClamped { .. } => "frame_clamped",
            EventKind::Custom { .. } => "custom",
        }
    }

    /// Cloth the event belongs to, for per-cloth payloads.
    pub fn cloth(&self) -> Option<u32> {
        match self {
            EventKind::Contacts { cloth, .. }
            | EventKind::Energy { cloth, .. }
            | EventKind::DegenerateFaces { cloth, .. } => Some(*cloth),
            _ => None,
        }
    }
}
