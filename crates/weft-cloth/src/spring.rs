//! Spring network: structural, shear, and bend connections.
//!
//! Springs reference their endpoints by [`PointId`] into the cloth's
//! point arena. Rest lengths are measured once from the initial
//! positions and never recomputed.

use serde::{Deserialize, Serialize};
use weft_math::Vec3;
use weft_types::constants::MIN_SPRING_LENGTH;
use weft_types::{PointId, SpringId, WeftError, WeftResult};

use crate::config::{ClothConfig, SpringParams};
use crate::point_mass::PointMass;

/// Which neighbor relation a spring encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpringKind {
    /// Right and below neighbors. Resists stretch.
    Structural,
    /// Diagonal neighbors. Resists shear.
    Shear,
    /// Neighbors two cells away on each axis. Resists bending.
    Bend,
}

impl SpringKind {
    /// All kinds, in build order.
    pub const ALL: [SpringKind; 3] = [SpringKind::Structural, SpringKind::Shear, SpringKind::Bend];

    /// Grid offsets `(dcol, drow)` this kind connects each point to.
    ///
    /// Each unordered pair appears exactly once over the whole grid.
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            SpringKind::Structural => &[(1, 0), (0, 1)],
            SpringKind::Shear => &[(1, 1), (-1, 1)],
            SpringKind::Bend => &[(2, 0), (0, 2)],
        }
    }
}

/// Elastic connection between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    pub a: PointId,
    pub b: PointId,
    pub rest_length: f32,
    pub stiffness: f32,
    pub damping: f32,
    pub kind: SpringKind,
}

impl Spring {
    /// Connects `a` and `b`, taking the rest length from their current
    /// separation.
    pub fn new(
        points: &[PointMass],
        a: PointId,
        b: PointId,
        kind: SpringKind,
        params: &SpringParams,
    ) -> WeftResult<Self> {
        let (pa, pb) = match (points.get(a.index()), points.get(b.index())) {
            (Some(pa), Some(pb)) if a != b => (pa, pb),
            _ => {
                return Err(WeftError::InvalidMesh(format!(
                    "Spring endpoints {} and {} are invalid (point count: {})",
                    a.0,
                    b.0,
                    points.len()
                )))
            }
        };

        let rest_length = pa.position.distance(pb.position);
        if rest_length < MIN_SPRING_LENGTH {
            return Err(WeftError::InvalidMesh(format!(
                "Spring endpoints {} and {} coincide",
                a.0, b.0
            )));
        }

        Ok(Self {
            a,
            b,
            rest_length,
            stiffness: params.stiffness,
            damping: params.damping,
            kind,
        })
    }

    /// Current length minus rest length.
    pub fn extension(&self, points: &[PointMass]) -> f32 {
        points[self.a.index()]
            .position
            .distance(points[self.b.index()].position)
            - self.rest_length
    }

    /// Force on endpoint `a`; endpoint `b` receives the negation.
    ///
    /// Hooke term `stiffness · extension` plus a damping term on the
    /// relative velocity along the spring axis. Zero if the endpoints
    /// coincide (no usable direction).
    pub fn force(&self, points: &[PointMass]) -> Vec3 {
        let pa = &points[self.a.index()];
        let pb = &points[self.b.index()];

        let separation = pb.position - pa.position;
        let length = separation.length();
        if !length.is_finite() || length < MIN_SPRING_LENGTH {
            return Vec3::ZERO;
        }

        let dir = separation / length;
        let extension = length - self.rest_length;
        let closing_speed = (pb.velocity - pa.velocity).dot(dir);

        dir * (self.stiffness * extension + self.damping * closing_speed)
    }

    /// Adds the equal-and-opposite force pair to both endpoints.
    pub fn apply(&self, points: &mut [PointMass]) {
        let f = self.force(points);
        points[self.a.index()].add_force(f);
        points[self.b.index()].add_force(-f);
    }
}

/// All springs of one cloth.
#[derive(Debug, Clone, Default)]
pub struct SpringNetwork {
    springs: Vec<Spring>,
}

impl SpringNetwork {
    /// Builds the network for a `columns × rows` row-major grid.
    ///
    /// Kinds disabled in `config` are skipped, as is any connection
    /// whose far endpoint falls outside the grid.
    pub fn build_grid(
        columns: usize,
        rows: usize,
        points: &[PointMass],
        config: &ClothConfig,
    ) -> WeftResult<Self> {
        if points.len() != columns * rows {
            return Err(WeftError::InvalidMesh(format!(
                "Point count ({}) != columns x rows ({} x {})",
                points.len(),
                columns,
                rows
            )));
        }

        let mut springs = Vec::new();
        for kind in SpringKind::ALL {
            let params = config.spring_params(kind);
            if !params.enabled {
                continue;
            }
            for row in 0..rows {
                for col in 0..columns {
                    for &(dc, dr) in kind.offsets() {
                        let (nc, nr) = (col as isize + dc, row as isize + dr);
                        if nc < 0 || nr < 0 || nc as usize >= columns || nr as usize >= rows {
                            continue;
                        }
                        let a = PointId((row * columns + col) as u32);
                        let b = PointId((nr as usize * columns + nc as usize) as u32);
                        springs.push(Spring::new(points, a, b, kind, params)?);
                    }
                }
            }
        }

        Ok(Self { springs })
    }

    /// Applies every spring once.
    pub fn apply_all(&self, points: &mut [PointMass]) {
        for spring in &self.springs {
            spring.apply(points);
        }
    }

    pub fn get(&self, id: SpringId) -> Option<&Spring> {
        self.springs.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.springs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Spring> {
        self.springs.iter()
    }

    /// Number of springs of one kind.
    pub fn count(&self, kind: SpringKind) -> usize {
        self.springs.iter().filter(|s| s.kind == kind).count()
    }

    /// Largest absolute extension relative to rest length.
    pub fn max_strain(&self, points: &[PointMass]) -> f32 {
        self.springs
            .iter()
            .map(|s| (s.extension(points) / s.rest_length).abs())
            .fold(0.0, f32::max)
    }
}
