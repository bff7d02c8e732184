//! Integration tests for weft-cloth.

use weft_cloth::{
    ClothConfig, ClothSystem, Face, IntegratorKind, PointMass, SemiImplicitEuler, Spring,
    SpringKind, SpringParams, Verlet,
};
use weft_cloth::integrator::Integrator;
use weft_contact::{GroundPlane, RigidShape, SphereShape};
use weft_math::{Vec2, Vec3};
use weft_mesh::{ClothMesh, GridSpec, PinPattern};
use weft_types::{FaceId, PointId, SpringId, WeftError};

fn approx(a: Vec3, b: Vec3, tol: f32) -> bool {
    (a - b).length() < tol
}

fn no_shapes() -> Vec<Box<dyn RigidShape>> {
    Vec::new()
}

fn point(i: u32, pos: Vec3) -> PointMass {
    PointMass::new(PointId(i), 0.1, pos, false).unwrap()
}

// ─── PointMass Tests ──────────────────────────────────────────

#[test]
fn point_rejects_bad_mass() {
    for mass in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let err = PointMass::new(PointId(3), mass, Vec3::ZERO, false).unwrap_err();
        assert!(matches!(err, WeftError::InvalidMass { point: 3, .. }));
    }
}

#[test]
fn set_mass_validates_like_new() {
    let mut p = point(5, Vec3::ZERO);
    p.add_force(Vec3::new(0.0, -1.0, 0.0));
    p.set_mass(0.5).unwrap();
    assert_eq!(p.mass(), 0.5);
    assert!(approx(p.acceleration(), Vec3::new(0.0, -2.0, 0.0), 1e-6));

    for mass in [0.0, -2.0, f32::NAN] {
        let err = p.set_mass(mass).unwrap_err();
        assert!(matches!(err, WeftError::InvalidMass { point: 5, .. }));
    }
    assert_eq!(p.mass(), 0.5, "rejected mass leaves the point unchanged");
}

#[test]
fn point_equality_is_identity() {
    let a = point(1, Vec3::ZERO);
    let mut b = point(1, Vec3::ONE);
    b.velocity = Vec3::X;
    assert_eq!(a, b);
    assert_ne!(a, point(2, Vec3::ZERO));
}

#[test]
fn point_accumulates_force() {
    let mut p = point(0, Vec3::ZERO);
    p.add_force(Vec3::new(1.0, 0.0, 0.0));
    p.add_force(Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(p.force(), Vec3::new(1.0, 2.0, 0.0));
    assert!(approx(p.acceleration(), Vec3::new(10.0, 20.0, 0.0), 1e-4));
    p.clear_accum();
    assert_eq!(p.force(), Vec3::ZERO);
}

#[test]
fn point_normal_is_average_of_faces() {
    let mut p = point(0, Vec3::ZERO);
    p.add_normal(Vec3::Z);
    p.add_normal(Vec3::Y);
    let n = p.calculate_point_normal();
    let expected = Vec3::new(0.0, 1.0, 1.0).normalize();
    assert!(approx(n, expected, 1e-6));
    assert_eq!(p.normal_count(), 2);
}

#[test]
fn point_normal_keeps_previous_when_faces_cancel() {
    let mut p = point(0, Vec3::ZERO);
    p.add_normal(Vec3::Z);
    p.calculate_point_normal();

    p.clear_normals();
    p.add_normal(Vec3::Y);
    p.add_normal(-Vec3::Y);
    assert_eq!(p.calculate_point_normal(), Vec3::Z);

    p.clear_normals();
    assert_eq!(p.calculate_point_normal(), Vec3::Z);
}

#[test]
fn pinning_anchors_current_position() {
    let mut p = point(0, Vec3::ZERO);
    p.position = Vec3::new(1.0, 2.0, 3.0);
    p.velocity = Vec3::new(0.0, -4.0, 0.0);
    p.set_immovable(true);
    assert_eq!(p.velocity, Vec3::ZERO, "pinning brings the point to rest");
    p.position = Vec3::ZERO;
    p.velocity = Vec3::ONE;
    p.enforce_pin();
    assert_eq!(p.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(p.velocity, Vec3::ZERO);
}

// ─── Spring Tests ─────────────────────────────────────────────

#[test]
fn spring_counts_on_grid() {
    let spec = GridSpec::square(2, 1.0);
    let cloth = ClothSystem::from_grid(
        &GridSpec { columns: 4, rows: 3, ..spec },
        ClothConfig::default(),
    )
    .unwrap();
    let springs = cloth.springs();
    assert_eq!(springs.count(SpringKind::Structural), 3 * 3 + 4 * 2);
    assert_eq!(springs.count(SpringKind::Shear), 2 * 3 * 2);
    assert_eq!(springs.count(SpringKind::Bend), 2 * 3 + 4);
    assert_eq!(springs.len(), 17 + 12 + 10);
    // Structural springs are built first, starting at the top-left point.
    let first = springs.get(SpringId(0)).unwrap();
    assert_eq!((first.a, first.b), (PointId(0), PointId(1)));
    assert!(springs.get(SpringId(39)).is_none());
}

#[test]
fn disabled_categories_are_not_built() {
    let mut config = ClothConfig::default();
    config.bend = config.bend.disabled();
    let cloth = ClothSystem::from_grid(&GridSpec::square(4, 0.1), config).unwrap();
    assert_eq!(cloth.springs().count(SpringKind::Bend), 0);
    assert!(cloth.springs().count(SpringKind::Structural) > 0);

    let ballistic = ClothSystem::from_grid(&GridSpec::square(4, 0.1), ClothConfig::ballistic()).unwrap();
    assert!(ballistic.springs().is_empty());
}

#[test]
fn spring_rest_length_from_initial_positions() {
    let points = vec![point(0, Vec3::ZERO), point(1, Vec3::new(3.0, 4.0, 0.0))];
    let s = Spring::new(&points, PointId(0), PointId(1), SpringKind::Structural, &SpringParams::new(1.0, 0.0)).unwrap();
    assert!((s.rest_length - 5.0).abs() < 1e-6);
    assert_eq!(s.force(&points), Vec3::ZERO);
}

#[test]
fn spring_rejects_bad_endpoints() {
    let points = vec![point(0, Vec3::ZERO), point(1, Vec3::ZERO)];
    let params = SpringParams::new(1.0, 0.0);
    assert!(Spring::new(&points, PointId(0), PointId(0), SpringKind::Shear, &params).is_err());
    assert!(Spring::new(&points, PointId(0), PointId(5), SpringKind::Shear, &params).is_err());
    // Coincident endpoints have no rest direction.
    assert!(Spring::new(&points, PointId(0), PointId(1), SpringKind::Shear, &params).is_err());
}

#[test]
fn stretched_spring_pulls_endpoints_together() {
    let mut points = vec![point(0, Vec3::ZERO), point(1, Vec3::X)];
    let s = Spring::new(&points, PointId(0), PointId(1), SpringKind::Structural, &SpringParams::new(10.0, 0.0)).unwrap();
    points[1].position = Vec3::new(1.5, 0.0, 0.0);

    s.apply(&mut points);
    assert!(approx(points[0].force(), Vec3::new(5.0, 0.0, 0.0), 1e-5));
    assert!(approx(points[1].force(), Vec3::new(-5.0, 0.0, 0.0), 1e-5));
}

#[test]
fn spring_damps_relative_velocity() {
    let mut points = vec![point(0, Vec3::ZERO), point(1, Vec3::X)];
    let s = Spring::new(&points, PointId(0), PointId(1), SpringKind::Structural, &SpringParams::new(10.0, 2.0)).unwrap();
    points[1].velocity = Vec3::new(1.0, 0.5, 0.0);

    // Only the axial part of the relative velocity is damped.
    assert!(approx(s.force(&points), Vec3::new(2.0, 0.0, 0.0), 1e-5));
}

// ─── Face Tests ───────────────────────────────────────────────

#[test]
fn right_triangle_normal_follows_winding() {
    let points = vec![
        point(0, Vec3::ZERO),
        point(1, Vec3::X),
        point(2, Vec3::Y),
    ];
    let ccw = Face::new(FaceId(0), [PointId(0), PointId(1), PointId(2)], &points).unwrap();
    assert!(approx(ccw.normal(), Vec3::Z, 1e-6));

    let cw = Face::new(FaceId(1), [PointId(0), PointId(2), PointId(1)], &points).unwrap();
    assert!(approx(cw.normal(), -Vec3::Z, 1e-6));
}

#[test]
fn degenerate_face_normal_is_finite() {
    let coincident = Face::normal_of(Vec3::ONE, Vec3::ONE, Vec3::ONE, Face::FALLBACK_NORMAL);
    assert_eq!(coincident, Face::FALLBACK_NORMAL);

    let colinear = Face::normal_of(Vec3::ZERO, Vec3::X, Vec3::X * 2.0, Vec3::Y);
    assert_eq!(colinear, Vec3::Y);
    assert!(colinear.is_finite());
}

#[test]
fn face_keeps_previous_normal_when_collapsed() {
    let mut points = vec![
        point(0, Vec3::ZERO),
        point(1, Vec3::X),
        point(2, Vec3::Y),
    ];
    let mut face = Face::new(FaceId(0), [PointId(0), PointId(1), PointId(2)], &points).unwrap();

    points[2].position = Vec3::X * 2.0;
    assert!(!face.update(&points));
    assert!(approx(face.normal(), Vec3::Z, 1e-6));
    assert_eq!(face.triangle().p3, Vec3::X * 2.0);
    assert_eq!(face.area(), 0.0);
}

#[test]
fn face_rejects_repeated_corners() {
    let points = vec![point(0, Vec3::ZERO), point(1, Vec3::X)];
    assert!(Face::new(FaceId(0), [PointId(0), PointId(1), PointId(0)], &points).is_err());
    assert!(Face::new(FaceId(0), [PointId(0), PointId(1), PointId(7)], &points).is_err());
}

// ─── Integrator Tests ─────────────────────────────────────────

#[test]
fn semi_implicit_euler_uses_new_velocity() {
    let mut points = vec![point(0, Vec3::ZERO)];
    points[0].add_force(Vec3::new(0.0, -1.0, 0.0)); // a = -10
    SemiImplicitEuler.solve(&mut points, 0.1);
    assert!(approx(points[0].velocity, Vec3::new(0.0, -1.0, 0.0), 1e-6));
    assert!(approx(points[0].position, Vec3::new(0.0, -0.1, 0.0), 1e-6));
    assert_eq!(points[0].previous_position, Vec3::ZERO);
}

#[test]
fn integrators_skip_immovable_points() {
    for mut integrator in [IntegratorKind::SemiImplicitEuler.build(), IntegratorKind::Verlet.build()] {
        let mut points = vec![PointMass::new(PointId(0), 0.1, Vec3::ONE, true).unwrap()];
        points[0].add_force(Vec3::new(5.0, 5.0, 5.0));
        integrator.solve(&mut points, 0.02);
        assert_eq!(points[0].position, Vec3::ONE, "{}", integrator.name());
        assert_eq!(points[0].velocity, Vec3::ZERO, "{}", integrator.name());
    }
}

#[test]
fn verlet_matches_euler_under_constant_force() {
    let dt = 0.01;
    let mut euler = vec![point(0, Vec3::ZERO)];
    let mut verlet_points = vec![point(0, Vec3::ZERO)];
    let mut verlet = Verlet::new();

    for _ in 0..20 {
        for pts in [&mut euler, &mut verlet_points] {
            pts[0].clear_accum();
            pts[0].add_force(Vec3::new(0.0, -0.98, 0.0));
        }
        SemiImplicitEuler.solve(&mut euler, dt);
        verlet.solve(&mut verlet_points, dt);
    }

    assert!(approx(euler[0].position, verlet_points[0].position, 1e-4));
    assert!(approx(euler[0].velocity, verlet_points[0].velocity, 1e-3));
}

#[test]
fn verlet_corrects_for_changing_timestep() {
    let mut points = vec![point(0, Vec3::ZERO)];
    points[0].previous_position = Vec3::new(-0.1, 0.0, 0.0); // 1 m/s at dt = 0.1
    let mut verlet = Verlet::new();
    verlet.solve(&mut points, 0.1);
    verlet.solve(&mut points, 0.05);
    assert!(approx(points[0].position, Vec3::new(0.15, 0.0, 0.0), 1e-5));
    assert!(approx(points[0].velocity, Vec3::X, 1e-4));
}

// ─── ClothSystem Tests ────────────────────────────────────────

fn two_by_two() -> ClothSystem {
    let spec = GridSpec::square(2, 1.0).with_pins(PinPattern::TopCorners);
    ClothSystem::from_grid(&spec, ClothConfig::default()).unwrap()
}

#[test]
fn two_by_two_falls_under_gravity() {
    let mut cloth = two_by_two();
    assert_eq!(cloth.point(PointId(0)).unwrap().position, Vec3::ZERO);
    assert_eq!(cloth.point(PointId(1)).unwrap().position, Vec3::X);

    let dt = 0.016;
    let report = cloth.step(dt, &no_shapes());
    assert!(!report.skipped);

    let vy = -9.8 * dt;
    for (id, x) in [(PointId(2), 0.0), (PointId(3), 1.0)] {
        let p = cloth.point(id).unwrap();
        assert!((p.velocity.y - vy).abs() < 1e-5, "vy = {}", p.velocity.y);
        assert!((p.position.y - (-1.0 + vy * dt)).abs() < 1e-6);
        assert!((p.position.x - x).abs() < 1e-6);
    }
    for id in [PointId(0), PointId(1)] {
        assert_eq!(cloth.point(id).unwrap().velocity, Vec3::ZERO);
    }
}

#[test]
fn pinned_points_never_move() {
    let spec = GridSpec::square(5, 0.1).with_pins(PinPattern::TopEdge);
    let mut cloth = ClothSystem::from_grid(&spec, ClothConfig::default()).unwrap();
    let initial: Vec<Vec3> = cloth.points().iter().map(|p| p.position).collect();
    let shapes: Vec<Box<dyn RigidShape>> = vec![Box::new(SphereShape::new(Vec3::new(0.2, -0.3, 0.0), 0.15))];

    for _ in 0..200 {
        cloth.step(1.0 / 60.0, &shapes);
    }

    for p in cloth.points().iter().filter(|p| p.is_immovable()) {
        assert_eq!(p.position, initial[p.id().index()]);
        assert_eq!(p.velocity, Vec3::ZERO);
    }
    assert_eq!(cloth.points().iter().filter(|p| p.is_immovable()).count(), 5);
}

#[test]
fn rest_configuration_is_equilibrium() {
    let config = ClothConfig {
        gravity: [0.0; 3],
        ..Default::default()
    };
    let spec = GridSpec::square(4, 0.25).with_pins(PinPattern::None);
    let mut cloth = ClothSystem::from_grid(&spec, config).unwrap();
    let initial: Vec<Vec3> = cloth.points().iter().map(|p| p.position).collect();

    for _ in 0..100 {
        cloth.step(0.01, &no_shapes());
    }

    for (p, start) in cloth.points().iter().zip(&initial) {
        assert!(approx(p.position, *start, 1e-6));
    }
    assert!(cloth.kinetic_energy() < 1e-10);
}

#[test]
fn released_cloth_energy_stays_bounded() {
    let spec = GridSpec::square(8, 0.1).with_pins(PinPattern::TopCorners);
    let mut cloth = ClothSystem::from_grid(&spec, ClothConfig::default()).unwrap();

    let mut peak = 0.0f64;
    for _ in 0..1000 {
        cloth.step(1.0 / 120.0, &no_shapes());
        let ke = cloth.kinetic_energy();
        assert!(ke.is_finite());
        peak = peak.max(ke);
    }

    // 62 free points at 0.1 kg cannot gain more than m·g·h from a short fall.
    assert!(peak < 100.0, "kinetic energy diverged: {peak}");
    assert!(cloth.points().iter().all(|p| p.position.is_finite()));
}

#[test]
fn point_inside_sphere_is_projected_to_surface() {
    let mut cloth = ClothSystem::from_grid(
        &GridSpec::square(2, 1.0).with_pins(PinPattern::None),
        ClothConfig::ballistic(),
    )
    .unwrap();
    let center = Vec3::new(0.8, -1.0, 0.0);
    let shapes: Vec<Box<dyn RigidShape>> = vec![Box::new(SphereShape::new(center, 0.5))];

    // Point 3 sits at (1, -1, 0), 0.2 from the center.
    cloth.point_mut(PointId(3)).unwrap().velocity = Vec3::new(-1.0, 0.0, 0.5);
    let result = cloth.resolve_collisions(&shapes, 0.016);

    let p = cloth.point(PointId(3)).unwrap();
    assert!(approx(p.position, Vec3::new(1.3, -1.0, 0.0), 1e-5));
    assert!(approx(p.velocity, Vec3::new(0.0, 0.0, 0.5), 1e-5));
    assert_eq!(result.resolved_count, 1);
    assert!((result.max_penetration - 0.3).abs() < 1e-5);

    // Outside the sphere: untouched.
    assert_eq!(cloth.point(PointId(2)).unwrap().position, Vec3::new(0.0, -1.0, 0.0));
}

#[test]
fn non_colliding_points_pass_through() {
    let mut cloth = ClothSystem::from_grid(&GridSpec::square(2, 1.0), ClothConfig::ballistic()).unwrap();
    let shapes: Vec<Box<dyn RigidShape>> = vec![Box::new(SphereShape::new(Vec3::new(1.1, -1.0, 0.0), 0.5))];
    cloth.point_mut(PointId(3)).unwrap().collides = false;
    let result = cloth.resolve_collisions(&shapes, 0.016);
    assert_eq!(result.resolved_count, 0);
}

#[test]
fn cloth_settles_on_ground_with_verlet() {
    let config = ClothConfig {
        integrator: IntegratorKind::Verlet,
        ..ClothConfig::ballistic()
    };
    let spec = GridSpec::square(3, 0.2).with_pins(PinPattern::None).with_plane(weft_mesh::GridPlane::Xz);
    let mut cloth = ClothSystem::from_grid(&spec, config).unwrap();
    assert_eq!(cloth.integrator_name(), "verlet");
    let shapes: Vec<Box<dyn RigidShape>> = vec![Box::new(GroundPlane::new(-0.5))];

    for _ in 0..300 {
        cloth.step(1.0 / 60.0, &shapes);
    }

    for p in cloth.points() {
        assert!(p.position.y > -0.51, "sank to {}", p.position.y);
        assert!(p.velocity.y.abs() < 0.2);
    }
}

#[test]
fn collapsed_faces_report_and_keep_normals() {
    let positions = vec![
        Vec3::ZERO,
        Vec3::X,
        Vec3::X * 2.0,
        Vec3::X * 3.0,
    ];
    let mesh = ClothMesh::from_parts(2, 2, positions, Vec::new(), vec![0, 2, 1, 1, 2, 3], vec![false; 4]).unwrap();
    let config = ClothConfig {
        gravity: [0.0; 3],
        ..ClothConfig::ballistic()
    };
    let mut cloth = ClothSystem::new(&mesh, config).unwrap();

    let report = cloth.step(0.01, &no_shapes());
    assert_eq!(report.degenerate_faces, 2);
    for face in cloth.faces() {
        assert_eq!(face.normal(), Face::FALLBACK_NORMAL);
    }
    for i in 0..4 {
        assert!(cloth.vertex_buffer().normal(i).is_finite());
    }
}

#[test]
fn unusable_timestep_is_skipped() {
    let mut cloth = two_by_two();
    let before: Vec<Vec3> = cloth.points().iter().map(|p| p.position).collect();
    for dt in [-0.01, f32::NAN, f32::INFINITY] {
        let report = cloth.step(dt, &no_shapes());
        assert!(report.skipped);
    }
    let after: Vec<Vec3> = cloth.points().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
    assert_eq!(cloth.step_count(), 0);
}

#[test]
fn zero_timestep_is_skipped() {
    let mut cloth = two_by_two();
    let before: Vec<Vec3> = cloth.points().iter().map(|p| p.position).collect();
    let report = cloth.step(0.0, &no_shapes());
    assert!(report.skipped);
    assert_eq!(report.dt, 0.0);
    let after: Vec<Vec3> = cloth.points().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
    assert_eq!(cloth.step_count(), 0);
}

#[test]
fn point_pinned_mid_fall_comes_to_rest() {
    let spec = GridSpec::square(3, 0.5);
    let mut cloth = ClothSystem::from_grid(&spec, ClothConfig::default()).unwrap();
    for _ in 0..10 {
        cloth.step(0.016, &no_shapes());
    }
    let centre = PointId(4);
    assert!(cloth.point(centre).unwrap().velocity.y < -1.0);

    cloth.set_pinned(centre, true).unwrap();
    let anchor = cloth.point(centre).unwrap().anchor();
    assert_eq!(cloth.point(centre).unwrap().velocity, Vec3::ZERO);

    for _ in 0..50 {
        cloth.step(0.016, &no_shapes());
        let p = cloth.point(centre).unwrap();
        assert_eq!(p.position, anchor);
        assert_eq!(p.velocity, Vec3::ZERO);
    }
    assert_eq!(cloth.point(centre).unwrap().kinetic_energy(), 0.0);
}

#[test]
fn vertex_buffer_mirrors_points() {
    let mut cloth = two_by_two();
    assert_eq!(cloth.vertex_buffer().normal(0), Vec3::Z);

    cloth.step(0.016, &no_shapes());
    let vb = cloth.vertex_buffer();
    assert_eq!(vb.vertex_count(), 4);
    for p in cloth.points() {
        let i = p.id().index();
        assert_eq!(vb.position(i), p.position);
        assert_eq!(vb.normal(i), p.normal());
    }
    assert_eq!(vb.uv(3), Vec2::new(1.0, 1.0));
    assert_eq!(cloth.index_buffer(), &[0, 2, 1, 1, 2, 3]);
}

#[test]
fn closest_surface_point_projects_onto_sheet() {
    let cloth = two_by_two();
    let hit = cloth.closest_surface_point(Vec3::new(0.5, -0.5, 2.0)).unwrap();
    assert!(approx(hit.point, Vec3::new(0.5, -0.5, 0.0), 1e-5));
    assert!((hit.distance - 2.0).abs() < 1e-5);
}

#[test]
fn energies_of_hanging_points() {
    let mut cloth = two_by_two();
    // Two free points at y = -1 with m = 0.1.
    assert!((cloth.potential_energy() - (-2.0 * 0.1 * 9.8)).abs() < 1e-4);
    assert_eq!(cloth.kinetic_energy(), 0.0);
    assert_eq!(cloth.elastic_energy(), 0.0);

    cloth.step(0.016, &no_shapes());
    assert!(cloth.kinetic_energy() > 0.0);
}

#[test]
fn set_pinned_validates_id() {
    let mut cloth = two_by_two();
    assert!(cloth.set_pinned(PointId(2), true).is_ok());
    assert!(cloth.point(PointId(2)).unwrap().is_immovable());
    let err = cloth.set_pinned(PointId(99), true).unwrap_err();
    assert!(matches!(err, WeftError::UnknownEntity { kind: "point", id: 99 }));
}

#[test]
fn point_at_maps_grid_cells() {
    let cloth = two_by_two();
    assert_eq!(cloth.point_at(1, 1), Some(PointId(3)));
    assert_eq!(cloth.point_at(2, 0), None);
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn config_presets_validate() {
    for config in [ClothConfig::default(), ClothConfig::silk(), ClothConfig::canvas(), ClothConfig::ballistic()] {
        config.validate().unwrap();
    }
}

#[test]
fn config_rejects_out_of_range_values() {
    let mut config = ClothConfig::default();
    config.point_mass = 0.0;
    assert!(config.validate().is_err());

    let mut config = ClothConfig::default();
    config.contact.friction = 1.5;
    assert!(config.validate().is_err());

    let mut config = ClothConfig::default();
    config.shear.stiffness = -1.0;
    assert!(config.validate().is_err());

    let mut config = ClothConfig::default();
    config.wind = [f32::NAN, 0.0, 0.0];
    assert!(config.validate().is_err());

    let spec = GridSpec::square(2, 1.0);
    assert!(ClothSystem::from_grid(&spec, ClothConfig { point_mass: -1.0, ..Default::default() }).is_err());
}

#[test]
fn config_from_partial_toml() {
    let config: ClothConfig = toml::from_str(
        r#"
        point_mass = 0.2
        integrator = "verlet"

        [bend]
        enabled = false
        stiffness = 0.0
        damping = 0.0
        "#,
    )
    .unwrap();
    assert_eq!(config.point_mass, 0.2);
    assert_eq!(config.integrator, IntegratorKind::Verlet);
    assert!(!config.bend.enabled);
    assert_eq!(config.structural, ClothConfig::default().structural);
}
