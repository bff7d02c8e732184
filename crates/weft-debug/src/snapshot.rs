//! State snapshot serialization for replay and debugging.
//!
//! Snapshots capture the dynamic state of a cloth at a point in time:
//! positions, velocities, and pin flags. Topology is not stored; a
//! snapshot is restored into a cloth built from the same grid.

use std::path::Path;

use serde::{Deserialize, Serialize};
use weft_cloth::ClothSystem;
use weft_math::Vec3;
use weft_types::{PointId, WeftError, WeftResult};

/// Dynamic state of one cloth.
///
/// Serialized with `bincode` for compact binary output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Engine step when this snapshot was taken.
    pub timestep: u64,
    /// Simulation time in seconds.
    pub sim_time: f64,
    /// Grid dimensions of the source cloth.
    pub columns: usize,
    pub rows: usize,
    /// Point positions (flat: [x0, y0, z0, x1, y1, z1, ...]).
    pub positions: Vec<f32>,
    /// Point velocities (flat: [vx0, vy0, vz0, ...]).
    pub velocities: Vec<f32>,
    /// Per-point pin flags.
    pub pinned: Vec<bool>,
}

/// Quick statistics over a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotSummary {
    pub point_count: usize,
    pub pinned_count: usize,
    pub bounds_min: Vec3,
    pub bounds_max: Vec3,
    pub centroid: Vec3,
    pub max_speed: f32,
}

impl StateSnapshot {
    /// Captures the current state of `cloth`.
    pub fn capture(cloth: &ClothSystem, timestep: u64, sim_time: f64) -> Self {
        let points = cloth.points();
        let mut positions = Vec::with_capacity(points.len() * 3);
        let mut velocities = Vec::with_capacity(points.len() * 3);
        for p in points {
            positions.extend_from_slice(&p.position.to_array());
            velocities.extend_from_slice(&p.velocity.to_array());
        }

        Self {
            timestep,
            sim_time,
            columns: cloth.columns(),
            rows: cloth.rows(),
            positions,
            velocities,
            pinned: points.iter().map(|p| p.is_immovable()).collect(),
        }
    }

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.pinned.len()
    }

    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[i * 3..i * 3 + 3])
    }

    pub fn velocity(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.velocities[i * 3..i * 3 + 3])
    }

    /// Checks internal buffer consistency.
    pub fn validate(&self) -> WeftResult<()> {
        let n = self.point_count();
        if n != self.columns * self.rows {
            return Err(WeftError::Serialization(format!(
                "Snapshot has {} points for a {}x{} grid",
                n, self.columns, self.rows
            )));
        }
        if self.positions.len() != n * 3 || self.velocities.len() != n * 3 {
            return Err(WeftError::Serialization(format!(
                "Snapshot buffers ({} positions, {} velocities) do not match {} points",
                self.positions.len(),
                self.velocities.len(),
                n
            )));
        }
        Ok(())
    }

    /// Writes the snapshot state back into `cloth`.
    ///
    /// The cloth must have the same grid dimensions. Pinned points are
    /// re-anchored at their restored positions.
    pub fn restore_into(&self, cloth: &mut ClothSystem) -> WeftResult<()> {
        self.validate()?;
        if cloth.columns() != self.columns || cloth.rows() != self.rows {
            return Err(WeftError::InvalidMesh(format!(
                "Snapshot grid {}x{} does not match cloth grid {}x{}",
                self.columns,
                self.rows,
                cloth.columns(),
                cloth.rows()
            )));
        }

        for i in 0..self.point_count() {
            let id = PointId(i as u32);
            let position = self.position(i);
            let velocity = self.velocity(i);
            let p = cloth.point_mut(id).ok_or(WeftError::UnknownEntity {
                kind: "point",
                id: id.0,
            })?;
            p.set_immovable(false);
            p.position = position;
            p.previous_position = position;
            p.velocity = velocity;
            p.set_immovable(self.pinned[i]);
        }

        cloth.update_faces();
        cloth.publish();
        Ok(())
    }

    /// Bounds, centroid, and peak speed.
    pub fn summary(&self) -> SnapshotSummary {
        let n = self.point_count();
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        let mut sum = Vec3::ZERO;
        let mut max_speed = 0.0f32;
        for i in 0..n {
            let p = self.position(i);
            min = min.min(p);
            max = max.max(p);
            sum += p;
            max_speed = max_speed.max(self.velocity(i).length());
        }

        SnapshotSummary {
            point_count: n,
            pinned_count: self.pinned.iter().filter(|&&p| p).count(),
            bounds_min: min,
            bounds_max: max,
            centroid: if n > 0 { sum / n as f32 } else { Vec3::ZERO },
            max_speed,
        }
    }
}

/// Snapshots of every cloth in a scene, written as one file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotBundle {
    pub snapshots: Vec<StateSnapshot>,
}

impl SnapshotBundle {
    pub fn new(snapshots: Vec<StateSnapshot>) -> Self {
        Self { snapshots }
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> WeftResult<Vec<u8>> {
        bincode::serialize(self)
            .map_err(|e| WeftError::Serialization(format!("Snapshot serialization failed: {e}")))
    }

    /// Deserializes from binary format and validates every snapshot.
    pub fn from_bytes(data: &[u8]) -> WeftResult<Self> {
        let bundle: Self = bincode::deserialize(data)
            .map_err(|e| WeftError::Serialization(format!("Snapshot deserialization failed: {e}")))?;
        for snapshot in &bundle.snapshots {
            snapshot.validate()?;
        }
        Ok(bundle)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> WeftResult<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    pub fn read_from(path: impl AsRef<Path>) -> WeftResult<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }
}
