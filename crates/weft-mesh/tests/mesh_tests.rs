//! Integration tests for weft-mesh.

use weft_math::{triangle_normal, Vec2, Vec3};
use weft_mesh::generators::grid_geometry;
use weft_mesh::{ClothMesh, GridPlane, GridSpec, PinPattern, VertexBuffer, FLOATS_PER_VERTEX};

// ─── GridSpec Tests ───────────────────────────────────────────

#[test]
fn grid_point_count_and_index() {
    let spec = GridSpec::square(4, 0.1);
    assert_eq!(spec.point_count(), 16);
    assert_eq!(spec.index(1, 2), 9);
}

#[test]
fn grid_rejects_single_row() {
    let mut spec = GridSpec::square(4, 0.1);
    spec.rows = 1;
    assert!(spec.validate().is_err());
}

#[test]
fn grid_rejects_non_positive_spacing() {
    assert!(GridSpec::square(3, 0.0).validate().is_err());
    assert!(GridSpec::square(3, -1.0).validate().is_err());
    assert!(GridSpec::square(3, f32::NAN).validate().is_err());
}

#[test]
fn grid_rejects_out_of_range_pin() {
    let spec = GridSpec::square(2, 1.0).with_pins(PinPattern::Indices(vec![0, 4]));
    assert!(spec.validate().is_err());
}

#[test]
fn pin_patterns_expand() {
    let spec = GridSpec::square(3, 1.0).with_pins(PinPattern::TopCorners);
    let flags = spec.pinned_flags();
    assert_eq!(flags.iter().filter(|&&p| p).count(), 2);
    assert!(flags[0] && flags[2]);

    let spec = spec.with_pins(PinPattern::TopEdge);
    assert_eq!(spec.pinned_flags().iter().filter(|&&p| p).count(), 3);

    let spec = spec.with_pins(PinPattern::Indices(vec![4]));
    let flags = spec.pinned_flags();
    assert!(flags[4]);
    assert_eq!(flags.iter().filter(|&&p| p).count(), 1);
}

#[test]
fn grid_spec_toml_round_trip() {
    let spec = GridSpec::square(5, 0.2)
        .with_plane(GridPlane::Xz)
        .with_pins(PinPattern::Indices(vec![1, 3]));
    let text = toml::to_string(&spec).unwrap();
    let recovered: GridSpec = toml::from_str(&text).unwrap();
    assert_eq!(recovered, spec);
}

#[test]
fn grid_spec_toml_defaults_plane_and_pins() {
    let text = r#"
        columns = 3
        rows = 4
        spacing = 0.5
        origin = [0.0, 1.0, 0.0]
    "#;
    let spec: GridSpec = toml::from_str(text).unwrap();
    assert_eq!(spec.plane, GridPlane::Xy);
    assert_eq!(spec.pins, PinPattern::None);
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn xy_grid_layout() {
    let spec = GridSpec::square(2, 1.0);
    let g = grid_geometry(&spec);
    assert_eq!(g.positions[0], Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(g.positions[1], Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(g.positions[2], Vec3::new(0.0, -1.0, 0.0));
    assert_eq!(g.positions[3], Vec3::new(1.0, -1.0, 0.0));
    assert_eq!(g.uvs[3], Vec2::new(1.0, 1.0));
}

#[test]
fn xy_grid_faces_point_plus_z() {
    let g = grid_geometry(&GridSpec::square(4, 0.25));
    for tri in g.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| g.positions[i as usize]);
        let n = triangle_normal(a, b, c).unwrap();
        assert!((n - Vec3::Z).length() < 1e-5, "normal {:?}", n);
    }
}

#[test]
fn xz_grid_faces_point_plus_y() {
    let g = grid_geometry(&GridSpec::square(3, 0.5).with_plane(GridPlane::Xz));
    for tri in g.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| g.positions[i as usize]);
        let n = triangle_normal(a, b, c).unwrap();
        assert!((n - Vec3::Y).length() < 1e-5, "normal {:?}", n);
    }
}

#[test]
fn rectangular_grid_counts() {
    let mut spec = GridSpec::square(2, 1.0);
    spec.columns = 5;
    spec.rows = 3;
    let mesh = ClothMesh::from_grid(&spec).unwrap();
    assert_eq!(mesh.vertex_count(), 15);
    assert_eq!(mesh.triangle_count(), 16); // 4×2 quads × 2
}

// ─── ClothMesh Tests ──────────────────────────────────────────

fn unit_square_parts() -> (Vec<Vec3>, Vec<u32>) {
    (
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
        ],
        vec![0, 2, 1, 1, 2, 3],
    )
}

#[test]
fn from_parts_accepts_valid_input() {
    let (positions, indices) = unit_square_parts();
    let mesh = ClothMesh::from_parts(2, 2, positions, Vec::new(), indices, vec![false; 4]).unwrap();
    assert_eq!(mesh.triangle(1), [1, 2, 3]);
    assert_eq!(mesh.uvs.len(), 4);
}

#[test]
fn from_parts_rejects_out_of_range_index() {
    let (positions, _) = unit_square_parts();
    let result = ClothMesh::from_parts(2, 2, positions, Vec::new(), vec![0, 1, 9], vec![false; 4]);
    assert!(result.is_err());
}

#[test]
fn from_parts_rejects_repeated_corner() {
    let (positions, _) = unit_square_parts();
    let result = ClothMesh::from_parts(2, 2, positions, Vec::new(), vec![0, 1, 1], vec![false; 4]);
    assert!(result.is_err());
}

#[test]
fn from_parts_rejects_grid_mismatch() {
    let (positions, indices) = unit_square_parts();
    let result = ClothMesh::from_parts(3, 2, positions, Vec::new(), indices, vec![false; 4]);
    assert!(result.is_err());
}

#[test]
fn from_parts_rejects_pin_length_mismatch() {
    let (positions, indices) = unit_square_parts();
    let result = ClothMesh::from_parts(2, 2, positions, Vec::new(), indices, vec![false; 3]);
    assert!(result.is_err());
}

#[test]
fn from_parts_rejects_non_finite_position() {
    let (mut positions, indices) = unit_square_parts();
    positions[2].y = f32::INFINITY;
    let result = ClothMesh::from_parts(2, 2, positions, Vec::new(), indices, vec![false; 4]);
    assert!(result.is_err());
}

// ─── VertexBuffer Tests ───────────────────────────────────────

#[test]
fn vertex_buffer_layout() {
    let mut buf = VertexBuffer::zeros(2);
    assert_eq!(buf.vertex_count(), 2);
    assert_eq!(buf.as_slice().len(), 2 * FLOATS_PER_VERTEX);

    buf.set_position(1, Vec3::new(1.0, 2.0, 3.0));
    buf.set_normal(1, Vec3::new(0.0, 0.0, 1.0));
    buf.set_uv(1, Vec2::new(0.25, 0.75));

    assert_eq!(&buf.as_slice()[8..16], &[1.0, 2.0, 3.0, 0.0, 0.0, 1.0, 0.25, 0.75]);
    assert_eq!(buf.position(1), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(buf.normal(1), Vec3::Z);
    assert_eq!(buf.uv(1), Vec2::new(0.25, 0.75));
    assert_eq!(buf.position(0), Vec3::ZERO);
}

#[test]
fn vertex_buffer_rejects_ragged_data() {
    assert!(VertexBuffer::from_interleaved(vec![0.0; 12]).is_err());
    let buf = VertexBuffer::from_interleaved(vec![0.0; 16]).unwrap();
    assert_eq!(buf.vertex_count(), 2);
}
