//! CLI command implementations.

use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use weft_bench::metrics::BenchmarkMetrics;
use weft_bench::runner::BenchmarkRunner;
use weft_bench::scenarios::{Scenario, ScenarioKind};
use weft_debug::{SnapshotBundle, StateSnapshot};
use weft_engine::SimulationConfig;
use weft_mesh::ClothMesh;
use weft_render::{JsonFrameExporter, Renderer};
use weft_telemetry::{JsonLinesSink, TracingSink};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Run a simulation from config file.
pub fn simulate(
    config_path: &str,
    json_path: Option<&str>,
    snapshot_path: Option<&str>,
    telemetry_path: Option<&str>,
) -> CliResult {
    println!("weft Simulation");
    println!("───────────────");
    println!("Config: {config_path}");

    let config = SimulationConfig::load(config_path)?;
    let mut engine = config.build_engine()?;
    engine.add_sink(Box::new(TracingSink::new(tracing::Level::DEBUG)));
    if let Some(path) = telemetry_path {
        let file = BufWriter::new(File::create(path)?);
        engine.add_sink(Box::new(JsonLinesSink::new(file)));
    }

    let frames = config.frame_count();
    let points: usize = engine.cloths().iter().map(|c| c.points().len()).sum();
    println!(
        "Scene:  {} cloth(s), {} shape(s), {} points",
        engine.cloth_count(),
        engine.shape_count(),
        points
    );
    println!("Frames: {} x {:.4}s ({:?})", frames, config.frame_dt, config.timestep);
    println!();

    let mut exporter = json_path.map(JsonFrameExporter::new);
    if let Some(exporter) = exporter.as_mut() {
        engine.attach_renderer(exporter)?;
        engine.render(exporter)?;
    }

    let start = Instant::now();
    let mut contacts: u64 = 0;
    let mut dropped = 0.0f32;
    for _ in 0..frames {
        let report = engine.update_physics(config.frame_dt);
        contacts += report.contacts as u64;
        dropped += report.dropped;
        if let Some(exporter) = exporter.as_mut() {
            engine.render(exporter)?;
        }
    }
    let wall = start.elapsed().as_secs_f64();
    engine.finalize();

    println!("  Wall time:     {:.3}s", wall);
    println!("  Steps:         {}", engine.step_count());
    println!("  Sim time:      {:.3}s", engine.sim_time());
    println!("  Contacts:      {}", contacts);
    if dropped > 0.0 {
        println!("  Dropped time:  {:.4}s", dropped);
    }
    println!("  Final KE:      {:.6e}", engine.total_kinetic_energy());

    if let Some(mut exporter) = exporter {
        exporter.finalize()?;
        println!("Frames written to: {}", exporter.output_path().display());
    }

    if let Some(path) = snapshot_path {
        let snapshots = engine
            .cloths()
            .iter()
            .map(|c| StateSnapshot::capture(c, engine.step_count(), engine.sim_time()))
            .collect();
        SnapshotBundle::new(snapshots).write_to(path)?;
        println!("Snapshot written to: {path}");
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(scenario_name: &str, output_path: Option<&str>) -> CliResult {
    println!("weft Benchmark Suite");
    println!("════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                eprintln!("Unknown scenario: {scenario_name}");
                eprintln!("Available: {}, all", available.join(", "));
                return Err("Unknown scenario".into());
            }
        }
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);

        println!(
            "Running: {} ({}x{} grid, {} frames)",
            kind.name(),
            scenario.grid.columns,
            scenario.grid.rows,
            scenario.frames,
        );

        let metrics = BenchmarkRunner::run(&scenario).map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg frame:     {:.3}ms", metrics.avg_frame_time * 1000.0);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Max displace:  {:.4}m", metrics.max_displacement);
        println!("  Contacts:      {}", metrics.contacts);
        println!();

        all_metrics.push(metrics);
    }

    if let Some(path) = output_path {
        let csv = BenchmarkMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Inspect a snapshot bundle.
pub fn inspect(path: &str) -> CliResult {
    println!("weft Snapshot Inspector");
    println!("───────────────────────");
    println!();

    let bundle = SnapshotBundle::read_from(path)?;
    println!("Cloths:       {}", bundle.snapshots.len());

    for (i, snapshot) in bundle.snapshots.iter().enumerate() {
        let s = snapshot.summary();
        println!();
        println!("[cloth {i}]");
        println!("  Timestep:   {}", snapshot.timestep);
        println!("  Sim time:   {:.4}s", snapshot.sim_time);
        println!("  Grid:       {}x{}", snapshot.columns, snapshot.rows);
        println!("  Points:     {} ({} pinned)", s.point_count, s.pinned_count);
        println!("  Bounds:     {} .. {}", s.bounds_min, s.bounds_max);
        println!("  Centroid:   {}", s.centroid);
        println!("  Max speed:  {:.4} m/s", s.max_speed);
    }

    Ok(())
}

/// Validate a config or mesh.
pub fn validate(path: &str) -> CliResult {
    println!("weft Validator");
    println!("──────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating config: {path}");
        match SimulationConfig::load(path) {
            Ok(config) => println!(
                "✅ Config is valid ({} cloth(s), {} shape(s), {} frames).",
                config.cloths.len(),
                config.shapes.len(),
                config.frame_count()
            ),
            Err(e) => {
                println!("❌ Config validation failed: {e}");
                return Err(e.into());
            }
        }
    } else if path.ends_with(".json") {
        println!("Validating mesh: {path}");
        let content = std::fs::read_to_string(path)?;
        let mesh: ClothMesh = serde_json::from_str(&content)?;
        match mesh.validate() {
            Ok(()) => println!(
                "✅ Mesh is valid ({} points, {} tris).",
                mesh.vertex_count(),
                mesh.triangle_count()
            ),
            Err(e) => {
                println!("❌ Mesh validation failed: {e}");
                return Err(e.into());
            }
        }
    } else {
        return Err(format!("unsupported file format for {path}: use .toml (config) or .json (mesh)").into());
    }

    Ok(())
}

/// Write the default scene.
pub fn init(path: &str) -> CliResult {
    if std::path::Path::new(path).exists() {
        return Err(format!("{path} already exists").into());
    }
    let text = SimulationConfig::default().to_toml_string()?;
    std::fs::write(path, text)?;
    println!("Wrote default config to: {path}");
    Ok(())
}
