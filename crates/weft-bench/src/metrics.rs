//! Benchmark metrics: data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Number of frames executed.
    pub frames: u32,
    /// Number of physics steps (differs from frames under substepping).
    pub steps: u64,
    /// Average wall-clock time per frame (seconds).
    pub avg_frame_time: f64,
    /// Minimum frame time.
    pub min_frame_time: f64,
    /// Maximum frame time.
    pub max_frame_time: f64,
    /// Final kinetic energy (should approach zero for a settled drape).
    pub final_kinetic_energy: f64,
    /// Maximum point displacement from initial position.
    pub max_displacement: f32,
    /// Largest relative spring extension at the final frame.
    pub max_strain: f32,
    /// Contacts resolved over the run.
    pub contacts: u64,
    /// Deepest penetration resolved over the run (meters).
    pub max_penetration: f32,
    /// Point count.
    pub point_count: usize,
    /// Spring count.
    pub spring_count: usize,
    /// Triangle count.
    pub triangle_count: usize,
}

impl BenchmarkMetrics {
    /// CSV header line.
    pub fn to_csv_header() -> String {
        "scenario,point_count,spring_count,triangle_count,frames,steps,total_wall_time_s,avg_frame_ms,min_frame_ms,max_frame_ms,final_ke,max_displacement,max_strain,contacts,max_penetration".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6e},{:.6},{:.6},{},{:.6}",
            self.scenario,
            self.point_count,
            self.spring_count,
            self.triangle_count,
            self.frames,
            self.steps,
            self.total_wall_time,
            self.avg_frame_time * 1000.0,
            self.min_frame_time * 1000.0,
            self.max_frame_time * 1000.0,
            self.final_kinetic_energy,
            self.max_displacement,
            self.max_strain,
            self.contacts,
            self.max_penetration,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
