//! Interleaved vertex buffer for the rendering collaborator.
//!
//! Each vertex occupies eight consecutive floats:
//! `[pos.x, pos.y, pos.z, normal.x, normal.y, normal.z, uv.u, uv.v]`.
//! The simulation writes positions and normals every step; the renderer
//! only ever reads.

use glam::{Vec2, Vec3};
use weft_types::{WeftError, WeftResult};

/// Floats per vertex in the interleaved layout.
pub const FLOATS_PER_VERTEX: usize = 8;

const NORMAL_OFFSET: usize = 3;
const UV_OFFSET: usize = 6;

/// Interleaved position/normal/UV buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexBuffer {
    data: Vec<f32>,
}

impl VertexBuffer {
    /// Creates a zero-filled buffer for `vertex_count` vertices.
    pub fn zeros(vertex_count: usize) -> Self {
        Self {
            data: vec![0.0; vertex_count * FLOATS_PER_VERTEX],
        }
    }

    /// Wraps existing interleaved data.
    ///
    /// Fails if the length is not a multiple of [`FLOATS_PER_VERTEX`].
    pub fn from_interleaved(data: Vec<f32>) -> WeftResult<Self> {
        if data.len() % FLOATS_PER_VERTEX != 0 {
            return Err(WeftError::InvalidMesh(format!(
                "Interleaved vertex data length ({}) not divisible by {}",
                data.len(),
                FLOATS_PER_VERTEX
            )));
        }
        Ok(Self { data })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.data.len() / FLOATS_PER_VERTEX
    }

    /// Returns true if the buffer holds no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw interleaved floats.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    fn read3(&self, i: usize, offset: usize) -> Vec3 {
        let base = i * FLOATS_PER_VERTEX + offset;
        Vec3::new(self.data[base], self.data[base + 1], self.data[base + 2])
    }

    #[inline]
    fn write3(&mut self, i: usize, offset: usize, v: Vec3) {
        let base = i * FLOATS_PER_VERTEX + offset;
        self.data[base..base + 3].copy_from_slice(&v.to_array());
    }

    /// Position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        self.read3(i, 0)
    }

    /// Normal of vertex `i`.
    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        self.read3(i, NORMAL_OFFSET)
    }

    /// Texture coordinate of vertex `i`.
    #[inline]
    pub fn uv(&self, i: usize) -> Vec2 {
        let base = i * FLOATS_PER_VERTEX + UV_OFFSET;
        Vec2::new(self.data[base], self.data[base + 1])
    }

    /// Sets the position of vertex `i`.
    #[inline]
    pub fn set_position(&mut self, i: usize, p: Vec3) {
        self.write3(i, 0, p);
    }

    /// Sets the normal of vertex `i`.
    #[inline]
    pub fn set_normal(&mut self, i: usize, n: Vec3) {
        self.write3(i, NORMAL_OFFSET, n);
    }

    /// Sets the texture coordinate of vertex `i`.
    #[inline]
    pub fn set_uv(&mut self, i: usize, uv: Vec2) {
        let base = i * FLOATS_PER_VERTEX + UV_OFFSET;
        self.data[base] = uv.x;
        self.data[base + 1] = uv.y;
    }
}
