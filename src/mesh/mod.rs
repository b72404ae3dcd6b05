//! `Mesh` struct and implementations of the `Triangulated3D` trait for `Mesh`

use crate::float_types::Real;
use crate::triangulated::Triangulated3D;
use crate::vertex::Vertex;
use nalgebra::{Point3, partial_max, partial_min};
use std::{fmt::Debug, sync::OnceLock};

#[derive(Clone, Debug)]
pub struct Mesh<S: Clone + Send + Sync + Debug> {
    /// Triangles of the closed surface, counter-clockwise seen from outside
    pub triangles: Vec<[Vertex; 3]>,

    /// Lazily calculated AABB that spans `triangles`.
    pub bounding_box: OnceLock<Option<[Point3<Real>; 2]>>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    pub fn new() -> Self {
        Mesh {
            triangles: Vec::new(),
            bounding_box: OnceLock::new(),
            metadata: None,
        }
    }

    pub fn from_triangles(triangles: Vec<[Vertex; 3]>, metadata: Option<S>) -> Self {
        Mesh {
            triangles,
            bounding_box: OnceLock::new(),
            metadata,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Enclosed volume by the divergence theorem, `Σ a·(b×c) / 6`.
    ///
    /// Positive for a closed surface whose triangles wind counter-clockwise seen
    /// from outside; meaningless for an open one.
    pub fn volume(&self) -> Real {
        self.triangles
            .iter()
            .map(|[a, b, c]| a.pos.coords.dot(&b.pos.coords.cross(&c.pos.coords)))
            .sum::<Real>()
            / 6.0
    }

    /// `[min, max]` corners, `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<[Point3<Real>; 2]> {
        *self.bounding_box.get_or_init(|| {
            let mut points = self.triangles.iter().flat_map(|tri| tri.iter().map(|v| v.pos));
            let first = points.next()?;
            Some(points.fold([first, first], |[lo, hi], p| {
                [
                    Point3::new(
                        *partial_min(&lo.x, &p.x).unwrap_or(&lo.x),
                        *partial_min(&lo.y, &p.y).unwrap_or(&lo.y),
                        *partial_min(&lo.z, &p.z).unwrap_or(&lo.z),
                    ),
                    Point3::new(
                        *partial_max(&hi.x, &p.x).unwrap_or(&hi.x),
                        *partial_max(&hi.y, &p.y).unwrap_or(&hi.y),
                        *partial_max(&hi.z, &p.z).unwrap_or(&hi.z),
                    ),
                ]
            }))
        })
    }
}

impl<S: Clone + Send + Sync + Debug> Default for Mesh<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Send + Sync + Debug> Triangulated3D for Mesh<S> {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for tri in &self.triangles {
            f(*tri);
        }
    }
}
