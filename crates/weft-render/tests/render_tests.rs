//! Integration tests for weft-render.

use weft_mesh::{ClothMesh, GridSpec, VertexBuffer};
use weft_render::renderer::{HeadlessRenderer, RenderFrame, Renderer};
use weft_render::JsonFrameExporter;
use weft_types::{ClothId, WeftError};

fn grid_buffer(mesh: &ClothMesh) -> VertexBuffer {
    let mut vb = VertexBuffer::zeros(mesh.vertex_count());
    for (i, p) in mesh.positions.iter().enumerate() {
        vb.set_position(i, *p);
    }
    vb
}

// ─── Headless Tests ───────────────────────────────────────────

#[test]
fn headless_init() {
    let mesh = ClothMesh::from_grid(&GridSpec::square(2, 1.0)).unwrap();
    let mut renderer = HeadlessRenderer::new();
    renderer.init(ClothId(0), &mesh.indices, mesh.vertex_count()).unwrap();
    assert_eq!(renderer.name(), "headless");
    assert_eq!(renderer.frame_count(), 0);
    assert_eq!(renderer.surface_count(), 1);
}

#[test]
fn headless_submit_frames() {
    let mesh = ClothMesh::from_grid(&GridSpec::square(2, 1.0)).unwrap();
    let vb = grid_buffer(&mesh);
    let mut renderer = HeadlessRenderer::new();
    renderer.init(ClothId(0), &mesh.indices, mesh.vertex_count()).unwrap();

    let frame = RenderFrame::new(0, ClothId(0), &vb);
    renderer.submit_frame(&frame).unwrap();
    renderer.submit_frame(&frame).unwrap();
    assert_eq!(renderer.frame_count(), 2);
    renderer.finalize().unwrap();
}

#[test]
fn render_frame_splits_channels() {
    let mesh = ClothMesh::from_grid(&GridSpec::square(2, 1.0)).unwrap();
    let vb = grid_buffer(&mesh);
    let frame = RenderFrame::new(42, ClothId(0), &vb);
    let positions = frame.positions();
    assert_eq!(positions.len(), 12);
    assert_eq!(&positions[3..6], &[1.0, 0.0, 0.0]);
    assert_eq!(frame.normals().len(), 12);
}

// ─── JSON Exporter Tests ──────────────────────────────────────

#[test]
fn json_exporter_writes_all_surfaces() {
    let path = std::env::temp_dir().join(format!("weft_render_test_{}.json", std::process::id()));
    let mesh = ClothMesh::from_grid(&GridSpec::square(3, 0.5)).unwrap();
    let vb = grid_buffer(&mesh);

    let mut exporter = JsonFrameExporter::new(&path);
    exporter.init(ClothId(0), &mesh.indices, mesh.vertex_count()).unwrap();
    exporter.init(ClothId(1), &mesh.indices, mesh.vertex_count()).unwrap();
    for t in 0..3 {
        exporter.submit_frame(&RenderFrame::new(t, ClothId(0), &vb)).unwrap();
    }
    exporter.submit_frame(&RenderFrame::new(0, ClothId(1), &vb)).unwrap();
    assert_eq!(exporter.frame_count(), 4);
    exporter.finalize().unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    let surfaces = json["surfaces"].as_array().unwrap();
    assert_eq!(surfaces.len(), 2);
    assert_eq!(surfaces[0]["triangle_count"], 8);
    assert_eq!(surfaces[0]["frames"].as_array().unwrap().len(), 3);
    assert_eq!(surfaces[1]["frames"][0]["positions"].as_array().unwrap().len(), 27);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn json_exporter_rejects_unknown_surface() {
    let mesh = ClothMesh::from_grid(&GridSpec::square(2, 1.0)).unwrap();
    let vb = grid_buffer(&mesh);
    let mut exporter = JsonFrameExporter::new(std::env::temp_dir().join("weft_unused.json"));
    let err = exporter.submit_frame(&RenderFrame::new(0, ClothId(7), &vb)).unwrap_err();
    assert!(matches!(err, WeftError::UnknownEntity { kind: "surface", id: 7 }));
}

#[test]
fn json_exporter_rejects_resized_frame() {
    let mesh = ClothMesh::from_grid(&GridSpec::square(2, 1.0)).unwrap();
    let mut exporter = JsonFrameExporter::new(std::env::temp_dir().join("weft_unused.json"));
    exporter.init(ClothId(0), &mesh.indices, mesh.vertex_count()).unwrap();
    let wrong = VertexBuffer::zeros(9);
    assert!(exporter.submit_frame(&RenderFrame::new(0, ClothId(0), &wrong)).is_err());
}
