//! JSON frame exporter: writes per-frame surface data for visual inspection.
//!
//! Implements the `Renderer` trait. Captures vertex positions and normals
//! of every surface at each frame, then serializes the whole animation to
//! a JSON file on `finalize()`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use weft_types::{ClothId, WeftError, WeftResult};

use crate::renderer::{RenderFrame, Renderer};

/// A single frame of one surface.
#[derive(Serialize)]
struct FrameData {
    timestep: u64,
    positions: Vec<f32>, // Interleaved [x0,y0,z0, x1,y1,z1, ...]
    normals: Vec<f32>,
}

/// Topology and frames of one surface.
#[derive(Serialize)]
struct SurfaceData {
    cloth: u32,
    vertex_count: usize,
    triangle_count: usize,
    indices: Vec<u32>,
    frames: Vec<FrameData>,
}

#[derive(Serialize)]
struct AnimationData<'a> {
    surfaces: Vec<&'a SurfaceData>,
}

/// Exports simulation frames to a JSON file.
///
/// Usage:
/// ```text
/// let mut exporter = JsonFrameExporter::new("output.json");
/// engine.render(&mut exporter)?; // once per frame
/// exporter.finalize()?;          // writes the file
/// ```
pub struct JsonFrameExporter {
    output_path: PathBuf,
    surfaces: BTreeMap<u32, SurfaceData>,
    frames: u32,
}

impl JsonFrameExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: impl AsRef<Path>) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
            surfaces: BTreeMap::new(),
            frames: 0,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, cloth: ClothId, indices: &[u32], vertex_count: usize) -> WeftResult<()> {
        if indices.len() % 3 != 0 {
            return Err(WeftError::InvalidMesh(format!(
                "Index count ({}) is not a multiple of 3",
                indices.len()
            )));
        }
        self.surfaces.insert(
            cloth.0,
            SurfaceData {
                cloth: cloth.0,
                vertex_count,
                triangle_count: indices.len() / 3,
                indices: indices.to_vec(),
                frames: Vec::new(),
            },
        );
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame<'_>) -> WeftResult<()> {
        let surface = self
            .surfaces
            .get_mut(&frame.cloth.0)
            .ok_or(WeftError::UnknownEntity {
                kind: "surface",
                id: frame.cloth.0,
            })?;
        if frame.vertices.vertex_count() != surface.vertex_count {
            return Err(WeftError::InvalidMesh(format!(
                "Frame has {} vertices, surface {} was initialized with {}",
                frame.vertices.vertex_count(),
                surface.cloth,
                surface.vertex_count
            )));
        }
        surface.frames.push(FrameData {
            timestep: frame.timestep,
            positions: frame.positions(),
            normals: frame.normals(),
        });
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> WeftResult<()> {
        let data = AnimationData {
            surfaces: self.surfaces.values().collect(),
        };
        let json = serde_json::to_string(&data)
            .map_err(|e| WeftError::Serialization(format!("JSON serialization failed: {e}")))?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
