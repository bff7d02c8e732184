//! Cloth system: owns points, springs, and faces, and advances them.
//!
//! One [`ClothSystem::step`] runs the full per-frame pipeline in a fixed
//! order:
//!
//! 1. clear force and normal accumulators
//! 2. external forces (gravity, wind) on free points
//! 3. spring forces
//! 4. integration
//! 5. pin enforcement
//! 6. collision response against every rigid shape
//! 7. face normals, collision triangles, point normals
//! 8. vertex buffer publication

use weft_contact::{respond, ContactResult, RigidShape};
use weft_math::{Triangle, Vec3};
use weft_mesh::{ClothMesh, GridSpec, VertexBuffer};
use weft_types::{FaceId, PointId, WeftError, WeftResult};

use crate::config::ClothConfig;
use crate::face::Face;
use crate::integrator::Integrator;
use crate::point_mass::PointMass;
use crate::spring::SpringNetwork;

/// Diagnostics for one step. Steps never fail; anything unusual ends up here.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    /// Timestep that was applied.
    pub dt: f32,
    /// Collision statistics over all shapes.
    pub contacts: ContactResult,
    /// Faces whose corners were degenerate this step.
    pub degenerate_faces: u32,
    /// True if `dt` was unusable and the step did nothing.
    pub skipped: bool,
}

/// Closest cloth surface point to a query position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub face: FaceId,
    pub point: Vec3,
    pub distance: f32,
}

/// A mass-spring cloth.
pub struct ClothSystem {
    columns: usize,
    rows: usize,
    config: ClothConfig,
    points: Vec<PointMass>,
    springs: SpringNetwork,
    faces: Vec<Face>,
    integrator: Box<dyn Integrator>,
    indices: Vec<u32>,
    vertices: VertexBuffer,
    steps: u64,
}

impl std::fmt::Debug for ClothSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClothSystem")
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("points", &self.points.len())
            .field("springs", &self.springs.len())
            .field("faces", &self.faces.len())
            .field("integrator", &self.integrator.name())
            .field("steps", &self.steps)
            .finish()
    }
}

impl ClothSystem {
    /// Builds a cloth from a grid description.
    pub fn from_grid(spec: &GridSpec, config: ClothConfig) -> WeftResult<Self> {
        let mesh = ClothMesh::from_grid(spec)?;
        Self::new(&mesh, config)
    }

    /// Builds a cloth from validated geometry.
    ///
    /// All malformed input is rejected here. The returned cloth already has
    /// face normals, point normals, and a published vertex buffer.
    pub fn new(mesh: &ClothMesh, config: ClothConfig) -> WeftResult<Self> {
        mesh.validate()?;
        config.validate()?;

        let points = mesh
            .positions
            .iter()
            .zip(&mesh.pinned)
            .enumerate()
            .map(|(i, (&pos, &pinned))| PointMass::new(PointId(i as u32), config.point_mass, pos, pinned))
            .collect::<WeftResult<Vec<_>>>()?;

        let springs = SpringNetwork::build_grid(mesh.columns, mesh.rows, &points, &config)?;

        let faces = (0..mesh.triangle_count())
            .map(|t| {
                let [a, b, c] = mesh.triangle(t);
                Face::new(FaceId(t as u32), [PointId(a), PointId(b), PointId(c)], &points)
            })
            .collect::<WeftResult<Vec<_>>>()?;

        let mut vertices = VertexBuffer::zeros(points.len());
        for (i, uv) in mesh.uvs.iter().enumerate() {
            vertices.set_uv(i, *uv);
        }

        let integrator = config.integrator.build();

        tracing::info!(
            points = points.len(),
            springs = springs.len(),
            faces = faces.len(),
            integrator = integrator.name(),
            "Cloth built"
        );

        let mut cloth = Self {
            columns: mesh.columns,
            rows: mesh.rows,
            config,
            points,
            springs,
            faces,
            integrator,
            indices: mesh.indices.clone(),
            vertices,
            steps: 0,
        };
        cloth.clear_accumulators();
        cloth.update_faces();
        cloth.publish();
        Ok(cloth)
    }

    /// Replaces the integrator.
    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        self.integrator = integrator;
        self
    }

    // ─── Step ─────────────────────────────────────────────────

    /// Advances the cloth by `dt` seconds against `shapes`.
    ///
    /// A zero, negative, or non-finite `dt` skips the step and leaves all
    /// state untouched.
    pub fn step(&mut self, dt: f32, shapes: &[Box<dyn RigidShape>]) -> StepReport {
        if !(dt.is_finite() && dt > 0.0) {
            tracing::warn!(dt, "Unusable timestep, skipping cloth step");
            return StepReport {
                dt,
                skipped: true,
                ..Default::default()
            };
        }

        self.clear_accumulators();
        self.apply_external_forces();
        self.apply_spring_forces();
        self.integrator.solve(&mut self.points, dt);
        self.enforce_pins();
        let contacts = self.resolve_collisions(shapes, dt);
        let degenerate_faces = self.update_faces();
        self.publish();

        self.steps += 1;
        if degenerate_faces > 0 {
            tracing::debug!(step = self.steps, degenerate_faces, "Degenerate faces kept previous normals");
        }
        tracing::trace!(
            step = self.steps,
            dt,
            contacts = contacts.resolved_count,
            "Cloth step"
        );

        StepReport {
            dt,
            contacts,
            degenerate_faces,
            skipped: false,
        }
    }

    /// Zeroes every point's force and normal accumulators.
    pub fn clear_accumulators(&mut self) {
        for p in &mut self.points {
            p.clear_accum();
            p.clear_normals();
        }
    }

    /// Adds `mass · gravity + wind` to every free point.
    pub fn apply_external_forces(&mut self) {
        let gravity = self.config.gravity_vec();
        let wind = self.config.wind_vec();
        for p in self.points.iter_mut().filter(|p| !p.is_immovable()) {
            let f = gravity * p.mass() + wind;
            p.add_force(f);
        }
    }

    /// Applies every spring once.
    pub fn apply_spring_forces(&mut self) {
        self.springs.apply_all(&mut self.points);
    }

    /// Holds pinned points at their anchors.
    pub fn enforce_pins(&mut self) {
        for p in &mut self.points {
            p.enforce_pin();
        }
    }

    /// Pushes penetrating points out of every shape.
    ///
    /// Pinned points and points with `collides == false` are skipped.
    /// After a response the point's `previous_position` is rebuilt from its
    /// new velocity so position-based integrators see consistent momentum.
    pub fn resolve_collisions(&mut self, shapes: &[Box<dyn RigidShape>], dt: f32) -> ContactResult {
        let mut result = ContactResult::default();
        let params = self.config.contact;

        for shape in shapes {
            for p in &mut self.points {
                if !p.collides || p.is_immovable() || !shape.contains(p.position) {
                    continue;
                }
                let Some(contact) = shape.contact(p.position) else {
                    continue;
                };
                respond(&mut p.position, &mut p.velocity, &contact, &params);
                p.previous_position = p.position - p.velocity * dt;
                result.record(contact.depth);
            }
        }

        result
    }

    /// Refreshes face normals, collision triangles, and point normals.
    ///
    /// Returns the number of degenerate faces.
    pub fn update_faces(&mut self) -> u32 {
        let mut degenerate = 0;
        for face in &mut self.faces {
            if !face.update(&self.points) {
                degenerate += 1;
            }
        }

        for p in &mut self.points {
            p.clear_normals();
        }
        for face in &self.faces {
            face.update_point_normals(&mut self.points);
        }
        for p in &mut self.points {
            p.calculate_point_normal();
        }

        degenerate
    }

    /// Writes positions and normals into the vertex buffer.
    pub fn publish(&mut self) {
        for (i, p) in self.points.iter().enumerate() {
            self.vertices.set_position(i, p.position);
            self.vertices.set_normal(i, p.normal());
        }
    }

    // ─── Accessors ────────────────────────────────────────────

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn config(&self) -> &ClothConfig {
        &self.config
    }

    pub fn points(&self) -> &[PointMass] {
        &self.points
    }

    pub fn point(&self, id: PointId) -> Option<&PointMass> {
        self.points.get(id.index())
    }

    /// Mutable access for callers that steer points between steps.
    pub fn point_mut(&mut self, id: PointId) -> Option<&mut PointMass> {
        self.points.get_mut(id.index())
    }

    /// Id of the point at grid cell `(column, row)`.
    pub fn point_at(&self, column: usize, row: usize) -> Option<PointId> {
        (column < self.columns && row < self.rows).then(|| PointId((row * self.columns + column) as u32))
    }

    /// Pins or releases a point.
    pub fn set_pinned(&mut self, id: PointId, pinned: bool) -> WeftResult<()> {
        let p = self.points.get_mut(id.index()).ok_or(WeftError::UnknownEntity {
            kind: "point",
            id: id.0,
        })?;
        p.set_immovable(pinned);
        Ok(())
    }

    pub fn springs(&self) -> &SpringNetwork {
        &self.springs
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Collision triangles as of the last step.
    pub fn triangles(&self) -> impl Iterator<Item = &Triangle> + '_ {
        self.faces.iter().map(Face::triangle)
    }

    pub fn integrator_name(&self) -> &str {
        self.integrator.name()
    }

    /// Steps taken so far.
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Interleaved `[pos.xyz, normal.xyz, uv.xy]` per point, as of the last step.
    pub fn vertex_buffer(&self) -> &VertexBuffer {
        &self.vertices
    }

    /// Triangle index buffer. Never changes after construction.
    pub fn index_buffer(&self) -> &[u32] {
        &self.indices
    }

    // ─── Queries ──────────────────────────────────────────────

    /// Total kinetic energy of free points (J).
    pub fn kinetic_energy(&self) -> f64 {
        self.points
            .iter()
            .filter(|p| !p.is_immovable())
            .map(PointMass::kinetic_energy)
            .sum()
    }

    /// Gravitational potential energy of free points relative to the origin (J).
    pub fn potential_energy(&self) -> f64 {
        let g = self.config.gravity_vec();
        self.points
            .iter()
            .filter(|p| !p.is_immovable())
            .map(|p| -(p.mass() as f64) * g.dot(p.position) as f64)
            .sum()
    }

    /// Elastic energy stored in the springs (J).
    pub fn elastic_energy(&self) -> f64 {
        self.springs
            .iter()
            .map(|s| {
                let x = s.extension(&self.points) as f64;
                0.5 * s.stiffness as f64 * x * x
            })
            .sum()
    }

    /// Closest point on the cloth surface to `query`, or `None` if the
    /// cloth has no faces.
    pub fn closest_surface_point(&self, query: Vec3) -> Option<SurfaceHit> {
        self.faces
            .iter()
            .map(|f| {
                let point = f.triangle().closest_point(query);
                SurfaceHit {
                    face: f.id(),
                    point,
                    distance: point.distance(query),
                }
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
