//! STL export of rotor solids.
//!
//! Facet normals are recomputed from each triangle's winding, so a mesh whose
//! vertex normals were never filled in (or were smoothed) still gets the flat
//! outward normals slicers expect.

use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::triangulated::Triangulated3D;
use nalgebra::{Point3, Vector3};
use std::fmt::{Debug, Write as _};

/// One flat STL facet.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Facet {
    normal: Vector3<Real>,
    vertices: [Point3<Real>; 3],
}

impl Facet {
    fn from_triangle(tri: [crate::vertex::Vertex; 3]) -> Self {
        let [a, b, c] = tri.map(|v| v.pos);
        // zero-area triangles keep the normal the mesh stored for them
        let normal = (b - a)
            .cross(&(c - a))
            .try_normalize(Real::MIN_POSITIVE)
            .unwrap_or(tri[0].normal);
        Facet {
            normal,
            vertices: [a, b, c],
        }
    }
}

fn facets<T: Triangulated3D>(shape: &T) -> Vec<Facet> {
    let mut out = Vec::new();
    shape.visit_triangles(|tri| out.push(Facet::from_triangle(tri)));
    out
}

/// `solid` names are a single token; whitespace would end the name early.
fn solid_name(name: &str) -> String {
    let token: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    if token.is_empty() {
        "gerotor".to_string()
    } else {
        token
    }
}

/// Convert a triangulated shape to an **ASCII STL** string.
///
/// ```rust
/// # use gerotor::pump::PumpSpec;
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let rotor = PumpSpec::default().gear_pair()?.inner_solid::<()>(64, None)?;
/// let text = rotor.to_stl_ascii("inner rotor");
/// assert!(text.starts_with("solid inner_rotor\n"));
/// # Ok(())
/// # }
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let name = solid_name(name);
    let facets = facets(shape);
    // a facet is roughly 250 bytes of text
    let mut out = String::with_capacity(64 + facets.len() * 256);

    // writing to a String cannot fail
    let _ = writeln!(out, "solid {name}");
    for Facet { normal: n, vertices } in &facets {
        let _ = writeln!(out, "  facet normal {:.6} {:.6} {:.6}", n.x, n.y, n.z);
        out.push_str("    outer loop\n");
        for p in vertices {
            let _ = writeln!(out, "      vertex {:.6} {:.6} {:.6}", p.x, p.y, p.z);
        }
        out.push_str("    endloop\n  endfacet\n");
    }
    let _ = writeln!(out, "endsolid {name}");
    out
}

/// Convert a triangulated shape to a **binary STL** buffer.
///
/// Coordinates are narrowed to `f32` as the format requires.
pub fn to_stl_binary<T: Triangulated3D>(shape: &T) -> std::io::Result<Vec<u8>> {
    let triangles: Vec<stl_io::Triangle> = facets(shape)
        .into_iter()
        .map(|Facet { normal: n, vertices }| stl_io::Triangle {
            normal: stl_io::Normal::new([n.x as f32, n.y as f32, n.z as f32]),
            vertices: vertices.map(|p| stl_io::Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
        })
        .collect();

    // 80 byte header, triangle count, 50 bytes per triangle
    let mut buffer = Vec::with_capacity(84 + 50 * triangles.len());
    stl_io::write_stl(&mut buffer, triangles.iter())?;
    tracing::trace!(triangles = triangles.len(), bytes = buffer.len(), "encoded binary STL");
    Ok(buffer)
}

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// ASCII STL of this rotor as `solid <name>`; whitespace in `name` becomes `_`.
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }

    /// Binary STL of this rotor.
    pub fn to_stl_binary(&self) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self)
    }
}
