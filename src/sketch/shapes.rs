//! 2D Shapes as `Sketch`s

use crate::errors::{GearError, require_positive};
use crate::float_types::{PI, Real, TAU, tolerance};
use crate::sampler;
use crate::sketch::Sketch;
use crate::trochoid::{CurvePoint, GearSpec};
use geo::{Contains, Coord, LineString, MultiPolygon, Polygon as GeoPolygon};
use std::fmt::Debug;

impl<S: Clone + Debug + Send + Sync> Sketch<S> {
    /// Closed outline through an ordered sequence of points.
    ///
    /// A trailing point equal to the first one is treated as the closing point,
    /// and consecutive duplicates are collapsed. "Equal" means within
    /// [`tolerance`] relative to the largest coordinate magnitude, so the same
    /// outline behaves alike at any scale.
    ///
    /// # Errors
    /// - [`GearError::DegenerateInput`] if a coordinate is NaN or infinite
    /// - [`GearError::TooFewPoints`] if fewer than 3 distinct points remain
    pub fn from_points(points: &[CurvePoint], metadata: Option<S>) -> Result<Self, GearError> {
        if let Some(p) = points.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(GearError::degenerate(format!(
                "outline point ({}, {}) is not finite",
                p.x, p.y
            )));
        }
        let scale = points
            .iter()
            .fold(0.0 as Real, |m, p| m.max(p.x.abs()).max(p.y.abs()));
        let eps = tolerance() * scale;

        let mut coords: Vec<Coord<Real>> = Vec::with_capacity(points.len() + 1);
        for p in points {
            let c = Coord { x: p.x, y: p.y };
            if coords.last().is_some_and(|last| near(*last, c, eps)) {
                continue;
            }
            coords.push(c);
        }
        while coords.len() > 1 && near(coords[0], coords[coords.len() - 1], eps) {
            coords.pop();
        }
        if coords.len() < 3 {
            return Err(GearError::TooFewPoints {
                got: coords.len(),
                min: 3,
            });
        }

        // geo closes the ring for us
        let polygon = GeoPolygon::new(LineString::new(coords), Vec::new());
        Ok(Sketch::from_geo(MultiPolygon::new(vec![polygon]), metadata))
    }

    /// Outline of a trochoid gear sampled with `point_count` subdivisions of a turn.
    ///
    /// ```rust
    /// # use gerotor::{sketch::Sketch, trochoid::GearSpec};
    /// let gear = GearSpec::new(10.0, 7).unwrap();
    /// let outline = Sketch::<()>::trochoid(&gear, 200, None).unwrap();
    /// assert_eq!(outline.outline().len(), 200);
    /// ```
    pub fn trochoid(
        gear: &GearSpec,
        point_count: usize,
        metadata: Option<S>,
    ) -> Result<Self, GearError> {
        let points = sampler::sample_vec(gear, point_count)?;
        Self::from_points(&points, metadata)
    }

    /// Circle of `radius` around the origin as a regular polygon with `segments` sides.
    ///
    /// The polygon circumscribes the circle: its vertices sit at
    /// `radius / cos(π / segments)` so every edge stays on or outside the true circle.
    pub fn circle(radius: Real, segments: usize, metadata: Option<S>) -> Result<Self, GearError> {
        require_positive("circle radius", radius)?;
        if segments < 3 {
            return Err(GearError::TooFewPoints {
                got: segments,
                min: 3,
            });
        }
        let vertex_radius = radius / (PI / segments as Real).cos();
        let points: Vec<CurvePoint> = (0..segments)
            .map(|i| {
                let theta = TAU * (i as Real) / (segments as Real);
                CurvePoint::new(vertex_radius * theta.cos(), vertex_radius * theta.sin())
            })
            .collect();
        Self::from_points(&points, metadata)
    }

    /// The region of `self` with `hole` cut out of it.
    ///
    /// Both sketches must be single polygons and `hole` must lie inside `self`
    /// (touching the boundary is allowed). The metadata of `self` is kept.
    pub fn with_hole(&self, hole: &Sketch<S>) -> Result<Self, GearError> {
        let (Some(outer), Some(inner)) = (single_polygon(self), single_polygon(hole)) else {
            return Err(GearError::degenerate(
                "with_hole expects two sketches made of exactly one polygon each",
            ));
        };
        let inner = GeoPolygon::new(inner.exterior().clone(), Vec::new());
        if !outer.contains(&inner) {
            return Err(GearError::degenerate(
                "hole outline is not contained in the outer outline",
            ));
        }

        let mut holes = outer.interiors().to_vec();
        holes.push(inner.exterior().clone());
        let polygon = GeoPolygon::new(outer.exterior().clone(), holes);
        Ok(Sketch::from_geo(
            MultiPolygon::new(vec![polygon]),
            self.metadata.clone(),
        ))
    }
}

fn single_polygon<S: Clone + Debug + Send + Sync>(sketch: &Sketch<S>) -> Option<&GeoPolygon<Real>> {
    match sketch.geometry.0.as_slice() {
        [polygon] => Some(polygon),
        _ => None,
    }
}

#[inline]
fn near(a: Coord<Real>, b: Coord<Real>, eps: Real) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_points_drops_closing_duplicate() {
        let pts = [
            CurvePoint::new(0.0, 0.0),
            CurvePoint::new(1.0, 0.0),
            CurvePoint::new(1.0, 1.0),
            CurvePoint::new(0.0, 0.0),
        ];
        let sketch = Sketch::<()>::from_points(&pts, None).unwrap();
        assert_eq!(sketch.outline().len(), 3);
        assert_relative_eq!(sketch.area(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn from_points_rejects_bad_input() {
        let two = [CurvePoint::new(0.0, 0.0), CurvePoint::new(1.0, 0.0)];
        assert!(matches!(
            Sketch::<()>::from_points(&two, None),
            Err(GearError::TooFewPoints { got: 2, min: 3 })
        ));
        let nan = [
            CurvePoint::new(0.0, 0.0),
            CurvePoint::new(Real::NAN, 0.0),
            CurvePoint::new(1.0, 1.0),
        ];
        assert!(matches!(
            Sketch::<()>::from_points(&nan, None),
            Err(GearError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn duplicate_detection_follows_outline_scale() {
        for radius in [1e-7, 1e7] {
            let gear = GearSpec::new(radius, 7).unwrap();
            let sketch = Sketch::<()>::trochoid(&gear, 200, None).unwrap();
            assert_eq!(sketch.outline().len(), 200, "radius {radius}");
        }
        let tiny = [
            CurvePoint::new(0.0, 0.0),
            CurvePoint::new(1e-12, 0.0),
            CurvePoint::new(1e-12, 1e-12),
        ];
        assert_eq!(Sketch::<()>::from_points(&tiny, None).unwrap().outline().len(), 3);
    }

    #[test]
    fn clockwise_input_is_reoriented() {
        let cw = [
            CurvePoint::new(0.0, 0.0),
            CurvePoint::new(0.0, 1.0),
            CurvePoint::new(1.0, 1.0),
            CurvePoint::new(1.0, 0.0),
        ];
        let sketch = Sketch::<()>::from_points(&cw, None).unwrap();
        use geo::Winding;
        assert!(sketch.geometry.0[0].exterior().is_ccw());
    }

    #[test]
    fn circle_circumscribes() {
        let c = Sketch::<()>::circle(2.0, 6, None).unwrap();
        let (lo, hi) = c.radial_extent().unwrap();
        assert_relative_eq!(lo, hi, epsilon = 1e-12);
        assert_eq!(c.min_radius(), Some(lo));
        assert_eq!(c.max_radius(), Some(hi));
        assert!(lo > 2.0);
        // hexagon with apothem 2
        assert_relative_eq!(c.area(), 6.0 * 2.0 * 2.0 * (PI / 6.0).tan(), epsilon = 1e-9);
        assert!(Sketch::<()>::circle(2.0, 2, None).is_err());
        assert!(Sketch::<()>::circle(0.0, 8, None).is_err());
    }

    #[test]
    fn hole_must_be_inside() {
        let big = Sketch::<()>::circle(5.0, 32, None).unwrap();
        let small = Sketch::<()>::circle(1.0, 32, None).unwrap();
        let ring = big.with_hole(&small).unwrap();
        assert_eq!(ring.geometry.0[0].interiors().len(), 1);
        assert_relative_eq!(ring.area(), big.area() - small.area(), epsilon = 1e-9);
        assert!(small.with_hole(&big).is_err());
    }
}
