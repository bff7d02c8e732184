//! # weft-render
//!
//! Renderer boundary for weft. Cloths publish interleaved vertex buffers;
//! a [`Renderer`] consumes them. Ships with a [`HeadlessRenderer`] stub
//! and a [`JsonFrameExporter`] for offline inspection.

pub mod json_exporter;
pub mod renderer;
pub use json_exporter::JsonFrameExporter;
pub use renderer::{HeadlessRenderer, RenderFrame, Renderer};
