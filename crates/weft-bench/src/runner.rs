//! Benchmark runner: executes scenarios on the engine and collects metrics.

use std::time::Instant;

use weft_math::Vec3;
use weft_types::{ClothId, WeftError, WeftResult};

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario.
    ///
    /// Returns metrics for the completed run.
    pub fn run(scenario: &Scenario) -> WeftResult<BenchmarkMetrics> {
        let mut engine = scenario.build_engine()?;
        let cloth_id = ClothId(0);
        let missing = || WeftError::UnknownEntity {
            kind: "cloth",
            id: cloth_id.0,
        };

        // Initial positions for displacement tracking
        let initial: Vec<Vec3> = engine
            .cloth(cloth_id)
            .ok_or_else(missing)?
            .points()
            .iter()
            .map(|p| p.position)
            .collect();

        let mut frame_times: Vec<f64> = Vec::with_capacity(scenario.frames as usize);
        let mut contacts: u64 = 0;
        let mut max_penetration = 0.0f32;

        let total_start = Instant::now();

        for _ in 0..scenario.frames {
            let start = Instant::now();
            let report = engine.update_physics(scenario.dt);
            frame_times.push(start.elapsed().as_secs_f64());
            contacts += report.contacts as u64;
            max_penetration = max_penetration.max(report.max_penetration);
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();
        engine.finalize();

        let cloth = engine.cloth(cloth_id).ok_or_else(missing)?;
        let max_displacement = cloth
            .points()
            .iter()
            .zip(&initial)
            .map(|(p, start)| p.position.distance(*start))
            .fold(0.0f32, f32::max);

        let avg_frame = if frame_times.is_empty() {
            0.0
        } else {
            frame_times.iter().sum::<f64>() / frame_times.len() as f64
        };
        let min_frame = frame_times.iter().copied().fold(f64::MAX, f64::min);
        let max_frame = frame_times.iter().copied().fold(0.0, f64::max);

        tracing::info!(
            scenario = scenario.kind.name(),
            frames = scenario.frames,
            total_wall_time,
            "Benchmark complete"
        );

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            total_wall_time,
            frames: scenario.frames,
            steps: engine.step_count(),
            avg_frame_time: avg_frame,
            min_frame_time: if frame_times.is_empty() { 0.0 } else { min_frame },
            max_frame_time: max_frame,
            final_kinetic_energy: cloth.kinetic_energy(),
            max_displacement,
            max_strain: cloth.springs().max_strain(cloth.points()),
            contacts,
            max_penetration,
            point_count: cloth.points().len(),
            spring_count: cloth.springs().len(),
            triangle_count: cloth.faces().len(),
        })
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> WeftResult<Vec<BenchmarkMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind);
            let metrics = Self::run(&scenario)?;
            results.push(metrics);
        }
        Ok(results)
    }
}
