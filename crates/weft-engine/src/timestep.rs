//! Frame-to-step timing policy.
//!
//! The host hands the engine one wall-clock delta per frame. The policy
//! decides how that delta becomes physics steps.

use serde::{Deserialize, Serialize};
use weft_types::constants::{DEFAULT_DT, DEFAULT_MAX_SUBSTEPS};
use weft_types::{WeftError, WeftResult};

/// How a frame delta is turned into physics steps.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TimestepPolicy {
    /// One step per frame with the frame delta as `dt`. No clamping.
    #[default]
    Variable,
    /// Accumulate frame time and consume it in steps of exactly `step`
    /// seconds, at most `max_substeps` per frame. Time beyond the cap is
    /// dropped.
    FixedSubstep { step: f32, max_substeps: u32 },
}

impl TimestepPolicy {
    /// Fixed substepping at `step` seconds with the default substep cap.
    pub fn fixed(step: f32) -> Self {
        TimestepPolicy::FixedSubstep {
            step,
            max_substeps: DEFAULT_MAX_SUBSTEPS,
        }
    }

    /// Fixed substepping at 60 Hz.
    pub fn fixed_60hz() -> Self {
        Self::fixed(DEFAULT_DT)
    }

    pub fn validate(&self) -> WeftResult<()> {
        match *self {
            TimestepPolicy::Variable => Ok(()),
            TimestepPolicy::FixedSubstep { step, max_substeps } => {
                if !(step.is_finite() && step > 0.0) {
                    return Err(WeftError::InvalidConfig(format!(
                        "Fixed step must be positive, got {step}"
                    )));
                }
                if max_substeps == 0 {
                    return Err(WeftError::InvalidConfig("max_substeps must be at least 1".into()));
                }
                Ok(())
            }
        }
    }
}

/// Steps to run for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FramePlan {
    /// `dt` of each step.
    pub step: f32,
    /// Number of steps.
    pub substeps: u32,
    /// Frame time discarded by the substep cap (seconds).
    pub dropped: f32,
}

impl FramePlan {
    /// Total simulated time.
    pub fn simulated(&self) -> f32 {
        self.step * self.substeps as f32
    }
}

/// Stateful frame clock applying a [`TimestepPolicy`].
#[derive(Debug, Clone)]
pub struct FrameClock {
    policy: TimestepPolicy,
    accumulator: f32,
}

impl FrameClock {
    pub fn new(policy: TimestepPolicy) -> Self {
        Self {
            policy,
            accumulator: 0.0,
        }
    }

    pub fn policy(&self) -> TimestepPolicy {
        self.policy
    }

    /// Time carried over to the next frame (fixed policy only).
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    /// Plans the steps for a frame of `frame_dt` seconds.
    ///
    /// A negative or non-finite `frame_dt` yields an empty plan, as does a
    /// zero delta under the variable policy.
    pub fn plan(&mut self, frame_dt: f32) -> FramePlan {
        if !(frame_dt.is_finite() && frame_dt >= 0.0) {
            return FramePlan::default();
        }

        match self.policy {
            TimestepPolicy::Variable if frame_dt == 0.0 => FramePlan::default(),
            TimestepPolicy::Variable => FramePlan {
                step: frame_dt,
                substeps: 1,
                dropped: 0.0,
            },
            TimestepPolicy::FixedSubstep { step, max_substeps } => {
                self.accumulator += frame_dt;
                let due = (self.accumulator / step).floor() as u32;
                if due > max_substeps {
                    let dropped = self.accumulator - max_substeps as f32 * step;
                    self.accumulator = 0.0;
                    FramePlan {
                        step,
                        substeps: max_substeps,
                        dropped,
                    }
                } else {
                    self.accumulator = (self.accumulator - due as f32 * step).max(0.0);
                    FramePlan {
                        step,
                        substeps: due,
                        dropped: 0.0,
                    }
                }
            }
        }
    }
}
