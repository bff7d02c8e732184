//! Physics engine: the per-frame orchestrator.
//!
//! Owns every cloth and rigid shape, turns frame deltas into steps via the
//! timestep policy, reports through the telemetry bus, and hands published
//! vertex buffers to renderers. Shapes are only moved between frames; the
//! cloths see them as read-only geometry while stepping.

use std::time::Instant;

use weft_cloth::ClothSystem;
use weft_contact::RigidShape;
use weft_math::Vec3;
use weft_render::{RenderFrame, Renderer};
use weft_telemetry::{EventBus, EventKind, EventSink};
use weft_types::{ClothId, ShapeId, WeftError, WeftResult};

use crate::timestep::{FrameClock, TimestepPolicy};

/// Aggregate of one `update_physics` call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    /// Steps taken this frame.
    pub substeps: u32,
    /// Simulated time advanced (seconds).
    pub simulated: f32,
    /// Frame time dropped by the substep cap (seconds).
    pub dropped: f32,
    /// Contacts resolved over all cloths and steps.
    pub contacts: u32,
    /// Deepest penetration resolved this frame.
    pub max_penetration: f32,
    /// Degenerate faces summed over all cloths and steps.
    pub degenerate_faces: u32,
}

/// Top-level simulation object.
pub struct PhysicsEngine {
    cloths: Vec<ClothSystem>,
    shapes: Vec<Box<dyn RigidShape>>,
    clock: FrameClock,
    bus: EventBus,
    sim_time: f64,
    steps: u64,
    frames: u64,
}

impl PhysicsEngine {
    /// Creates an empty engine with the variable timestep policy.
    pub fn new() -> Self {
        Self::with_policy(TimestepPolicy::default())
    }

    pub fn with_policy(policy: TimestepPolicy) -> Self {
        Self {
            cloths: Vec::new(),
            shapes: Vec::new(),
            clock: FrameClock::new(policy),
            bus: EventBus::new(),
            sim_time: 0.0,
            steps: 0,
            frames: 0,
        }
    }

    // ─── Registration ─────────────────────────────────────────

    /// Registers a cloth and returns its handle.
    pub fn add_cloth(&mut self, cloth: ClothSystem) -> ClothId {
        let id = ClothId(self.cloths.len() as u32);
        tracing::info!(cloth = id.0, points = cloth.points().len(), "Cloth registered");
        self.cloths.push(cloth);
        id
    }

    /// Registers a rigid shape and returns its handle.
    pub fn add_shape(&mut self, shape: Box<dyn RigidShape>) -> ShapeId {
        let id = ShapeId(self.shapes.len() as u32);
        tracing::info!(shape = id.0, kind = shape.name(), "Shape registered");
        self.shapes.push(shape);
        id
    }

    pub fn cloth(&self, id: ClothId) -> Option<&ClothSystem> {
        self.cloths.get(id.index())
    }

    pub fn cloth_mut(&mut self, id: ClothId) -> Option<&mut ClothSystem> {
        self.cloths.get_mut(id.index())
    }

    pub fn cloths(&self) -> &[ClothSystem] {
        &self.cloths
    }

    pub fn shape(&self, id: ShapeId) -> Option<&dyn RigidShape> {
        self.shapes.get(id.index()).map(|s| s.as_ref())
    }

    /// Mutable shape access. Only valid between frames.
    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut (dyn RigidShape + 'static)> {
        self.shapes.get_mut(id.index()).map(|s| s.as_mut())
    }

    pub fn shapes(&self) -> &[Box<dyn RigidShape>] {
        &self.shapes
    }

    /// Translates a shape rigidly.
    pub fn move_shape(&mut self, id: ShapeId, offset: Vec3) -> WeftResult<()> {
        let shape = self.shape_mut(id).ok_or(WeftError::UnknownEntity {
            kind: "shape",
            id: id.0,
        })?;
        shape.translate(offset);
        Ok(())
    }

    pub fn cloth_count(&self) -> usize {
        self.cloths.len()
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    // ─── Telemetry ────────────────────────────────────────────

    /// Registers a telemetry sink.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.bus.add_sink(sink);
    }

    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Flushes telemetry and finalizes every sink.
    pub fn finalize(&mut self) {
        self.bus.finalize();
    }

    // ─── Stepping ─────────────────────────────────────────────

    /// Advances the whole simulation by one frame of `frame_dt` seconds.
    ///
    /// Never fails. Unusable deltas yield an empty report.
    pub fn update_physics(&mut self, frame_dt: f32) -> FrameReport {
        let plan = self.clock.plan(frame_dt);
        if plan.substeps == 0 && !(frame_dt.is_finite() && frame_dt >= 0.0) {
            tracing::warn!(frame_dt, "Unusable frame delta, no physics this frame");
        }

        let mut report = FrameReport {
            substeps: plan.substeps,
            simulated: plan.simulated(),
            dropped: plan.dropped,
            ..Default::default()
        };

        for _ in 0..plan.substeps {
            self.step_all(plan.step, &mut report);
        }

        if plan.dropped > 0.0 {
            tracing::warn!(
                requested = frame_dt,
                simulated = report.simulated,
                dropped = plan.dropped,
                "Frame exceeded substep budget"
            );
            self.bus.begin_step(self.steps);
            self.bus.record(EventKind::FrameClamped {
                requested: frame_dt,
                simulated: report.simulated,
            });
        }

        self.frames += 1;
        self.bus.flush();
        report
    }

    /// One step of every cloth against every shape.
    fn step_all(&mut self, dt: f32, report: &mut FrameReport) {
        let start = Instant::now();
        self.bus.begin_step(self.steps);
        self.bus.record(EventKind::StepBegin {
            sim_time: self.sim_time,
            dt,
        });

        for (i, cloth) in self.cloths.iter_mut().enumerate() {
            let step = cloth.step(dt, &self.shapes);
            let id = i as u32;

            report.contacts += step.contacts.resolved_count;
            report.max_penetration = report.max_penetration.max(step.contacts.max_penetration);
            report.degenerate_faces += step.degenerate_faces;

            self.bus.record(EventKind::Contacts {
                cloth: id,
                count: step.contacts.resolved_count,
                max_penetration: step.contacts.max_penetration,
            });
            if step.degenerate_faces > 0 {
                self.bus.record(EventKind::DegenerateFaces {
                    cloth: id,
                    count: step.degenerate_faces,
                });
            }
            if self.bus.is_listening_to(id) {
                self.bus.record(EventKind::Energy {
                    cloth: id,
                    kinetic: cloth.kinetic_energy(),
                    potential: cloth.potential_energy(),
                    elastic: cloth.elastic_energy(),
                });
            }
        }

        self.bus.record(EventKind::StepEnd {
            wall_time: start.elapsed().as_secs_f64(),
        });

        self.sim_time += dt as f64;
        self.steps += 1;
    }

    // ─── Rendering ────────────────────────────────────────────

    /// Registers every cloth's topology with `renderer`.
    ///
    /// Call once per renderer before the first [`render`](Self::render).
    pub fn attach_renderer(&self, renderer: &mut dyn Renderer) -> WeftResult<()> {
        for (i, cloth) in self.cloths.iter().enumerate() {
            renderer.init(ClothId(i as u32), cloth.index_buffer(), cloth.points().len())?;
        }
        tracing::debug!(renderer = renderer.name(), surfaces = self.cloths.len(), "Renderer attached");
        Ok(())
    }

    /// Submits every cloth's current vertex buffer to `renderer`.
    pub fn render(&self, renderer: &mut dyn Renderer) -> WeftResult<()> {
        for (i, cloth) in self.cloths.iter().enumerate() {
            renderer.submit_frame(&RenderFrame::new(self.steps, ClothId(i as u32), cloth.vertex_buffer()))?;
        }
        Ok(())
    }

    // ─── Queries ──────────────────────────────────────────────

    /// Simulated time so far (seconds).
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Physics steps taken so far.
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Frames processed so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn policy(&self) -> TimestepPolicy {
        self.clock.policy()
    }

    /// Kinetic energy summed over all cloths.
    pub fn total_kinetic_energy(&self) -> f64 {
        self.cloths.iter().map(ClothSystem::kinetic_energy).sum()
    }
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::new()
    }
}
