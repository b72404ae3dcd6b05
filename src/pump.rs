//! Gear pair geometry of a trochoid (gerotor) pump.
//!
//! The outer rotor has `N` teeth and the inner rotor `N − 1`. Given the outer
//! rotor and a running clearance, the inner rotor's base circle is
//!
//! ```text
//! tooth_height = outer_radius / (2·N)
//! inner_radius = outer_radius − 2·(tooth_height + clearance)
//! ```
//!
//! [`derive`] applies these formulas as-is. [`PumpSpec::validate`] is the gate that
//! rejects degenerate or infeasible configurations before any curve is computed.

use crate::errors::{GearError, require_non_negative, require_positive};
use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::sketch::Sketch;
use crate::trochoid::GearSpec;
use std::fmt::Debug;

/// Inner rotor parameters derived from the outer rotor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InnerGearSpec {
    pub teeth: usize,
    pub radius: Real,
    pub tooth_height: Real,
}

/// Derive the inner rotor from the outer rotor radius, tooth count and clearance.
///
/// No validation happens here: a non-positive `radius` or fewer than two
/// inner teeth are returned unchanged (`teeth` saturates at 0). Use
/// [`PumpSpec::validate`] to reject such configurations.
pub fn derive(outer_radius: Real, outer_teeth: usize, clearance: Real) -> InnerGearSpec {
    let tooth_height = outer_radius / (2.0 * outer_teeth as Real);
    InnerGearSpec {
        teeth: outer_teeth.saturating_sub(1),
        radius: outer_radius - 2.0 * (tooth_height + clearance),
        tooth_height,
    }
}

/// User facing pump parameters, all lengths in one consistent unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PumpSpec {
    /// Base circle radius of the outer rotor
    pub outer_radius: Real,
    /// Tooth count of the outer rotor; the inner rotor gets one fewer
    pub outer_teeth: usize,
    /// Running clearance between the rotors
    pub clearance: Real,
    /// Extrusion height of both rotors
    pub height: Real,
    /// Wall thickness of the outer rotor beyond its lobe tips
    pub thickness: Real,
}

impl Default for PumpSpec {
    fn default() -> Self {
        PumpSpec {
            outer_radius: 10.0,
            outer_teeth: 7,
            clearance: 0.01,
            height: 5.0,
            thickness: 2.0,
        }
    }
}

impl PumpSpec {
    /// Smallest outer tooth count that still leaves the inner rotor two teeth.
    pub const MIN_OUTER_TEETH: usize = GearSpec::MIN_TEETH + 1;

    /// Multiply every length by `factor`, e.g. [`crate::float_types::INCH`].
    pub fn scaled(self, factor: Real) -> Self {
        PumpSpec {
            outer_radius: self.outer_radius * factor,
            clearance: self.clearance * factor,
            height: self.height * factor,
            thickness: self.thickness * factor,
            ..self
        }
    }

    /// Check every parameter and the derived inner rotor.
    ///
    /// # Errors
    /// - [`GearError::DegenerateInput`] for non-finite values, `outer_radius <= 0`,
    ///   `outer_teeth < 3`, `clearance < 0`, `height <= 0` or `thickness < 0`
    /// - [`GearError::InfeasibleGeometry`] when the derived inner radius is `<= 0`,
    ///   i.e. `tooth_height + clearance >= outer_radius / 2`
    pub fn validate(&self) -> Result<InnerGearSpec, GearError> {
        require_positive("outer radius", self.outer_radius)?;
        if self.outer_teeth < Self::MIN_OUTER_TEETH {
            return Err(GearError::degenerate(format!(
                "outer rotor needs at least {} teeth, got {}",
                Self::MIN_OUTER_TEETH,
                self.outer_teeth
            )));
        }
        require_non_negative("clearance", self.clearance)?;
        require_positive("height", self.height)?;
        require_non_negative("thickness", self.thickness)?;

        let inner = derive(self.outer_radius, self.outer_teeth, self.clearance);
        if inner.radius <= 0.0 {
            return Err(GearError::InfeasibleGeometry {
                inner_radius: inner.radius,
            });
        }
        tracing::debug!(
            outer_radius = self.outer_radius,
            outer_teeth = self.outer_teeth,
            inner_radius = inner.radius,
            inner_teeth = inner.teeth,
            tooth_height = inner.tooth_height,
            "derived inner rotor"
        );
        Ok(inner)
    }

    /// Validate and package both rotors.
    pub fn gear_pair(&self) -> Result<GearPair, GearError> {
        let inner = self.validate()?;
        Ok(GearPair {
            outer: GearSpec::new(self.outer_radius, self.outer_teeth)?,
            inner: GearSpec::new(inner.radius, inner.teeth)?,
            height: self.height,
            housing_radius: self.outer_radius + 2.0 * inner.tooth_height + self.thickness,
        })
    }
}

/// Both rotor curves of a validated pump plus the dimensions of the solids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearPair {
    pub outer: GearSpec,
    pub inner: GearSpec,
    /// Extrusion height
    pub height: Real,
    /// Outer radius of the outer rotor body (lobe tips plus wall thickness)
    pub housing_radius: Real,
}

impl GearPair {
    /// Outline of the inner rotor.
    pub fn inner_rotor<S: Clone + Debug + Send + Sync>(
        &self,
        point_count: usize,
        metadata: Option<S>,
    ) -> Result<Sketch<S>, GearError> {
        Sketch::trochoid(&self.inner, point_count, metadata)
    }

    /// The trochoid cavity the inner rotor runs in.
    pub fn outer_profile<S: Clone + Debug + Send + Sync>(
        &self,
        point_count: usize,
        metadata: Option<S>,
    ) -> Result<Sketch<S>, GearError> {
        Sketch::trochoid(&self.outer, point_count, metadata)
    }

    /// Outer rotor body: a disc of `housing_radius` with the outer trochoid cut out.
    pub fn outer_rotor<S: Clone + Debug + Send + Sync>(
        &self,
        point_count: usize,
        metadata: Option<S>,
    ) -> Result<Sketch<S>, GearError> {
        let body = Sketch::circle(self.housing_radius, point_count, metadata)?;
        body.with_hole(&self.outer_profile(point_count, None)?)
    }

    /// Inner rotor extruded by `height`.
    pub fn inner_solid<S: Clone + Debug + Send + Sync>(
        &self,
        point_count: usize,
        metadata: Option<S>,
    ) -> Result<Mesh<S>, GearError> {
        self.inner_rotor(point_count, metadata)?.extrude(self.height)
    }

    /// Outer rotor extruded by `height`.
    pub fn outer_solid<S: Clone + Debug + Send + Sync>(
        &self,
        point_count: usize,
        metadata: Option<S>,
    ) -> Result<Mesh<S>, GearError> {
        self.outer_rotor(point_count, metadata)?.extrude(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn derive_reference_pump() {
        let inner = derive(10.0, 7, 0.01);
        assert_eq!(inner.teeth, 6);
        assert_relative_eq!(inner.tooth_height, 10.0 / 14.0, epsilon = 1e-12);
        assert_relative_eq!(inner.radius, 10.0 - 2.0 * (10.0 / 14.0 + 0.01), epsilon = 1e-12);
        assert_relative_eq!(inner.radius, 8.5514, epsilon = 1e-4);
    }

    #[test]
    fn derive_does_not_validate() {
        let inner = derive(1.0, 7, 1.0);
        assert!(inner.radius <= 0.0);
        assert_eq!(derive(10.0, 2, 0.0).teeth, 1);
        assert_eq!(derive(10.0, 0, 0.0).teeth, 0);
    }

    #[test]
    fn infeasible_is_flagged() {
        let spec = PumpSpec {
            outer_radius: 1.0,
            outer_teeth: 7,
            clearance: 1.0,
            ..PumpSpec::default()
        };
        assert!(matches!(
            spec.validate(),
            Err(GearError::InfeasibleGeometry { inner_radius }) if inner_radius <= 0.0
        ));
        assert!(spec.gear_pair().is_err());
    }

    #[test]
    fn degenerate_inputs() {
        let base = PumpSpec::default();
        let cases = [
            PumpSpec { outer_radius: 0.0, ..base },
            PumpSpec { outer_radius: Real::NAN, ..base },
            PumpSpec { outer_teeth: 2, ..base },
            PumpSpec { outer_teeth: 1, ..base },
            PumpSpec { clearance: -0.1, ..base },
            PumpSpec { height: 0.0, ..base },
            PumpSpec { thickness: -1.0, ..base },
        ];
        for spec in cases {
            assert!(
                matches!(spec.validate(), Err(GearError::DegenerateInput { .. })),
                "{spec:?} should be rejected"
            );
        }
        assert!(PumpSpec { thickness: 0.0, clearance: 0.0, ..base }.validate().is_ok());
    }

    #[test]
    fn gear_pair_packages_both_rotors() {
        let pair = PumpSpec::default().gear_pair().unwrap();
        assert_eq!(pair.outer.teeth(), 7);
        assert_eq!(pair.inner.teeth(), 6);
        assert_relative_eq!(pair.inner.radius(), derive(10.0, 7, 0.01).radius);
        assert_relative_eq!(pair.housing_radius, pair.outer.tip_radius() + 2.0, epsilon = 1e-12);
        assert_eq!(pair.height, 5.0);
    }

    #[test]
    fn scaling_keeps_teeth() {
        let spec = PumpSpec::default().scaled(2.0);
        assert_eq!(spec.outer_teeth, 7);
        assert_eq!(spec.outer_radius, 20.0);
        assert_eq!(spec.height, 10.0);
    }
}
