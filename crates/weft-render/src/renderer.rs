//! Renderer trait and HeadlessRenderer stub.
//!
//! A renderer is the downstream consumer of cloth surfaces. It is told each
//! surface's topology once, then receives the interleaved vertex buffer of
//! every surface after each rendered frame. The headless renderer discards
//! all frames, serving as a no-op for benchmarks and CI.

use weft_mesh::VertexBuffer;
use weft_types::{ClothId, WeftResult};

/// One cloth surface as of one frame.
///
/// Borrows the cloth's published buffer; renderers copy what they keep.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    /// Engine step this frame corresponds to.
    pub timestep: u64,
    /// Surface the vertices belong to.
    pub cloth: ClothId,
    /// Interleaved `[pos.xyz, normal.xyz, uv.xy]` per vertex.
    pub vertices: &'a VertexBuffer,
}

impl<'a> RenderFrame<'a> {
    pub fn new(timestep: u64, cloth: ClothId, vertices: &'a VertexBuffer) -> Self {
        Self {
            timestep,
            cloth,
            vertices,
        }
    }

    /// Positions only, as a flat `[x0, y0, z0, x1, ...]` array.
    pub fn positions(&self) -> Vec<f32> {
        (0..self.vertices.vertex_count())
            .flat_map(|i| self.vertices.position(i).to_array())
            .collect()
    }

    /// Normals only, as a flat `[x0, y0, z0, x1, ...]` array.
    pub fn normals(&self) -> Vec<f32> {
        (0..self.vertices.vertex_count())
            .flat_map(|i| self.vertices.normal(i).to_array())
            .collect()
    }
}

/// Trait for rendering simulation output.
///
/// # Implementations
/// - [`HeadlessRenderer`] — Discards frames (benchmarks, CI)
/// - [`JsonFrameExporter`](crate::JsonFrameExporter) — Writes frames to a JSON file
pub trait Renderer: Send {
    /// Registers a surface's topology. Called once per cloth before any
    /// of its frames.
    fn init(&mut self, cloth: ClothId, indices: &[u32], vertex_count: usize) -> WeftResult<()>;

    /// Submit a frame for rendering.
    fn submit_frame(&mut self, frame: &RenderFrame<'_>) -> WeftResult<()>;

    /// Finalize rendering (flush buffers, close files, etc.).
    fn finalize(&mut self) -> WeftResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Headless renderer: counts frames and discards them.
///
/// Used for benchmarks and CI where no visual output is needed.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    surfaces: usize,
    frames: u32,
}

impl HeadlessRenderer {
    /// Creates a new headless renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of surfaces registered through `init`.
    pub fn surface_count(&self) -> usize {
        self.surfaces
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, _cloth: ClothId, _indices: &[u32], _vertex_count: usize) -> WeftResult<()> {
        self.surfaces += 1;
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &RenderFrame<'_>) -> WeftResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> WeftResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
