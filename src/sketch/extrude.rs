//! Linear extrusion of a `Sketch` into a closed `Mesh`

use crate::errors::{GearError, require_positive};
use crate::float_types::{Real, tolerance};
use crate::mesh::Mesh;
use crate::sketch::Sketch;
use crate::vertex::Vertex;
use nalgebra::{Point3, Vector3};
use std::fmt::Debug;

impl<S: Clone + Debug + Send + Sync> Sketch<S> {
    /// Linearly extrude this sketch along +Z by `height`.
    ///
    /// - The bottom cap lies at z = 0 facing −Z, the top cap at z = `height` facing +Z.
    /// - Side walls are formed between the bottom and top copy of every ring edge.
    ///   Exteriors are CCW and holes CW, so `(dy, −dx)` is always the outward normal.
    ///
    /// Fails with [`GearError::DegenerateInput`] when `height` is not a finite positive value.
    pub fn extrude(&self, height: Real) -> Result<Mesh<S>, GearError> {
        require_positive("extrusion height", height)?;

        let up = Vector3::z();
        let down = -up;
        let lift = up * height;
        let mut triangles = Vec::new();

        // 1) caps
        for [a, b, c] in self.triangulate() {
            triangles.push([
                Vertex::new(a, down),
                Vertex::new(c, down),
                Vertex::new(b, down),
            ]);
            triangles.push([
                Vertex::new(a + lift, up),
                Vertex::new(b + lift, up),
                Vertex::new(c + lift, up),
            ]);
        }

        // 2) side walls, a quad [b_i, b_j, t_j, t_i] per edge split into two triangles
        let eps = tolerance();
        for polygon in &self.geometry {
            for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
                for line in ring.lines() {
                    let (dx, dy) = (line.end.x - line.start.x, line.end.y - line.start.y);
                    let len = dx.hypot(dy);
                    if len <= eps {
                        continue;
                    }
                    let normal = Vector3::new(dy / len, -dx / len, 0.0);
                    let b_i = Point3::new(line.start.x, line.start.y, 0.0);
                    let b_j = Point3::new(line.end.x, line.end.y, 0.0);
                    let (t_i, t_j) = (b_i + lift, b_j + lift);
                    triangles.push([
                        Vertex::new(b_i, normal),
                        Vertex::new(b_j, normal),
                        Vertex::new(t_j, normal),
                    ]);
                    triangles.push([
                        Vertex::new(b_i, normal),
                        Vertex::new(t_j, normal),
                        Vertex::new(t_i, normal),
                    ]);
                }
            }
        }

        tracing::debug!(
            height,
            polygons = self.geometry.0.len(),
            triangles = triangles.len(),
            "extruded sketch"
        );
        Ok(Mesh::from_triangles(triangles, self.metadata.clone()))
    }
}
