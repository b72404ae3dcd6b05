//! `Sketch`: closed 2D rotor outlines.
//!
//! A sketch is a closed 2D region in the XY plane. Its geometry is stored as a
//! `geo::MultiPolygon` whose exteriors are counter-clockwise and whose holes are
//! clockwise, whatever orientation the input had.

use crate::float_types::Real;
use crate::trochoid::CurvePoint;
use geo::{Area, BoundingRect, CoordsIter, MultiPolygon, Orient, Rect, orient::Direction};
use nalgebra::Point3;
use std::fmt::Debug;

pub mod extrude;
pub mod shapes;

#[derive(Clone, Debug)]
pub struct Sketch<S: Clone + Send + Sync + Debug> {
    /// Region covered by the sketch
    pub geometry: MultiPolygon<Real>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Default for Sketch<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Send + Sync + Debug> Sketch<S> {
    /// Returns a new empty Sketch
    pub fn new() -> Self {
        Sketch {
            geometry: MultiPolygon::new(Vec::new()),
            metadata: None,
        }
    }

    /// Wrap an existing `geo` region, normalising ring orientation.
    pub fn from_geo(geometry: MultiPolygon<Real>, metadata: Option<S>) -> Self {
        Sketch {
            geometry: geometry.orient(Direction::Default),
            metadata,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.geometry.0.is_empty()
    }

    /// Enclosed area, holes excluded.
    pub fn area(&self) -> Real {
        self.geometry.unsigned_area()
    }

    /// Axis-aligned bounds, `None` for an empty sketch.
    pub fn bounding_box(&self) -> Option<Rect<Real>> {
        self.geometry.bounding_rect()
    }

    /// Smallest and largest vertex distance from the origin.
    pub fn radial_extent(&self) -> Option<(Real, Real)> {
        self.geometry
            .coords_iter()
            .map(|c| c.x.hypot(c.y))
            .fold(None, |acc, r| match acc {
                None => Some((r, r)),
                Some((lo, hi)) => Some((lo.min(r), hi.max(r))),
            })
    }

    /// Largest vertex distance from the origin: the tip radius of a rotor
    /// outline, the housing radius of an outer rotor.
    pub fn max_radius(&self) -> Option<Real> {
        self.radial_extent().map(|(_, hi)| hi)
    }

    /// Smallest vertex distance from the origin: the root radius of a rotor
    /// outline, the cavity root radius of an outer rotor.
    pub fn min_radius(&self) -> Option<Real> {
        self.radial_extent().map(|(lo, _)| lo)
    }

    /// Exterior ring of the first polygon, without the closing duplicate.
    pub fn outline(&self) -> Vec<CurvePoint> {
        let Some(polygon) = self.geometry.0.first() else {
            return Vec::new();
        };
        let ring = &polygon.exterior().0;
        let open = ring.len().saturating_sub(1);
        ring[..open]
            .iter()
            .map(|c| CurvePoint::new(c.x, c.y))
            .collect()
    }

    /// Ear-cut triangulation of every polygon, embedded at z = 0.
    ///
    /// Triangles are counter-clockwise seen from +Z.
    pub fn triangulate(&self) -> Vec<[Point3<Real>; 3]> {
        use geo::TriangulateEarcut;

        let mut result = Vec::new();
        for polygon in &self.geometry {
            let triangulation = polygon.earcut_triangles_raw();
            let vertices = triangulation.vertices;
            for tri in triangulation.triangle_indices.chunks_exact(3) {
                let [a, b, c] = [tri[0], tri[1], tri[2]]
                    .map(|i| Point3::new(vertices[2 * i], vertices[2 * i + 1], 0.0));
                let winding = (b - a).cross(&(c - a)).z;
                if winding < 0.0 {
                    result.push([a, c, b]);
                } else {
                    result.push([a, b, c]);
                }
            }
        }
        result
    }
}
