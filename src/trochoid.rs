//! Trochoidal gear curves.
//!
//! A trochoid gear outline alternates between an **epicycloid** lobe (the rolling
//! circle runs outside the base circle, giving the tooth tip) and a **hypocycloid**
//! arc (the rolling circle runs inside, giving the tooth root). Each tooth spans an
//! angular period of `2π / teeth`; the first half of the period uses the epicycloid,
//! the second half the hypocycloid.
//!
//! ```rust
//! use gerotor::trochoid::{GearSpec, evaluate};
//! let gear = GearSpec::new(10.0, 7).unwrap();
//! let p = evaluate(0.0, &gear);
//! assert!((p.x - 10.0).abs() < 1e-12 && p.y.abs() < 1e-12);
//! ```

use crate::errors::{GearError, require_positive};
use crate::float_types::{PI, Real, TAU};
use nalgebra::Point2;

/// A point on a gear outline. The z coordinate is imposed by whoever consumes it.
pub type CurvePoint = Point2<Real>;

/// Base circle radius and tooth count of one trochoid gear.
///
/// Always valid once constructed: `radius > 0`, `teeth >= 2`, so the rolling
/// circle radius is strictly positive and the curve formulas never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearSpec {
    radius: Real,
    teeth: usize,
}

impl GearSpec {
    /// Smallest tooth count accepted for a single gear.
    pub const MIN_TEETH: usize = 2;

    /// Create a validated gear spec.
    ///
    /// Fails with [`GearError::DegenerateInput`] when `radius` is not a finite
    /// positive value or `teeth < 2` (one tooth is a single degenerate lobe).
    pub fn new(radius: Real, teeth: usize) -> Result<Self, GearError> {
        require_positive("gear radius", radius)?;
        if teeth < Self::MIN_TEETH {
            return Err(GearError::degenerate(format!(
                "a trochoid gear needs at least {} teeth, got {teeth}",
                Self::MIN_TEETH
            )));
        }
        Ok(GearSpec { radius, teeth })
    }

    /// Base circle radius (`r_c`).
    pub const fn radius(&self) -> Real {
        self.radius
    }

    pub const fn teeth(&self) -> usize {
        self.teeth
    }

    /// Rolling circle radius `r_m = radius / teeth / 2`.
    pub fn roller_radius(&self) -> Real {
        self.radius / self.teeth as Real / 2.0
    }

    /// Angular span of one tooth, `2π / teeth`.
    pub fn period(&self) -> Real {
        TAU / self.teeth as Real
    }

    /// Angular span of the epicycloid half of a tooth, `π / teeth`.
    pub fn half_period(&self) -> Real {
        PI / self.teeth as Real
    }

    /// Radius of the lobe tips, `r_c + 2·r_m`.
    pub fn tip_radius(&self) -> Real {
        self.radius + 2.0 * self.roller_radius()
    }

    /// Radius of the deepest root points, `r_c - 2·r_m`.
    pub fn root_radius(&self) -> Real {
        self.radius - 2.0 * self.roller_radius()
    }
}

/// Which of the two curve regimes produced a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Rolling circle outside the base circle: tooth tip.
    Epicycloid,
    /// Rolling circle inside the base circle: tooth root.
    Hypocycloid,
}

/// Pick the regime for `theta`.
///
/// The phase within a tooth is taken with `rem_euclid`, so negative
/// angles select the same branch as their positive equivalents. A phase of
/// exactly `π / teeth` already belongs to the hypocycloid.
pub fn branch(theta: Real, gear: &GearSpec) -> Branch {
    let phase = theta.rem_euclid(gear.period());
    if phase < gear.half_period() {
        Branch::Epicycloid
    } else {
        Branch::Hypocycloid
    }
}

/// Evaluate the trochoid outline of `gear` at angle `theta`.
pub fn evaluate(theta: Real, gear: &GearSpec) -> CurvePoint {
    let r_c = gear.radius();
    let r_m = gear.roller_radius();
    match branch(theta, gear) {
        Branch::Epicycloid => epicycloid(theta, r_c, r_m, Some(r_m)),
        Branch::Hypocycloid => hypocycloid(theta, r_c, r_m, Some(r_m)),
    }
}

/// Epicycloid traced by a rolling circle of radius `r_m` around a base circle `r_c`.
///
/// `r_d` is the distance of the tracing point from the rolling circle centre and
/// defaults to `r_m` (a pure epicycloid, no extra trochoid offset).
///
/// x = (r_c + r_m)·cos θ − r_d·cos((r_c + r_m)/r_m · θ)
/// y = (r_c + r_m)·sin θ − r_d·sin((r_c + r_m)/r_m · θ)
#[inline]
pub fn epicycloid(theta: Real, r_c: Real, r_m: Real, r_d: Option<Real>) -> CurvePoint {
    let r_d = r_d.unwrap_or(r_m);
    let k = (r_c + r_m) / r_m;
    CurvePoint::new(
        (r_c + r_m) * theta.cos() - r_d * (k * theta).cos(),
        (r_c + r_m) * theta.sin() - r_d * (k * theta).sin(),
    )
}

/// Hypocycloid traced by a rolling circle of radius `r_m` inside a base circle `r_c`.
///
/// x = (r_c − r_m)·cos θ + r_d·cos(−(r_c − r_m)/r_m · θ)
/// y = (r_c − r_m)·sin θ + r_d·sin(−(r_c − r_m)/r_m · θ)
#[inline]
pub fn hypocycloid(theta: Real, r_c: Real, r_m: Real, r_d: Option<Real>) -> CurvePoint {
    let r_d = r_d.unwrap_or(r_m);
    let k = -(r_c - r_m) / r_m;
    CurvePoint::new(
        (r_c - r_m) * theta.cos() + r_d * (k * theta).cos(),
        (r_c - r_m) * theta.sin() + r_d * (k * theta).sin(),
    )
}
