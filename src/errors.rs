//! Validation errors

use crate::float_types::Real;

/// All the possible validation issues we might encounter while turning pump
/// parameters into curves, outlines and solids.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GearError {
    /// (DegenerateInput) A parameter would make the curve formulas divide by zero
    /// or is otherwise outside its domain (teeth < 2, radius <= 0, NaN, ...)
    #[error("(DegenerateInput) {reason}")]
    DegenerateInput { reason: String },
    /// (InfeasibleGeometry) The derived inner rotor radius is not positive
    #[error(
        "(InfeasibleGeometry) derived inner radius {inner_radius} is not positive; \
         the outer radius is too small for this tooth count and clearance"
    )]
    InfeasibleGeometry { inner_radius: Real },
    /// (TooFewPoints) A curve sampling or outline has fewer than the minimal #points
    #[error("(TooFewPoints) got {got} points, need at least {min}")]
    TooFewPoints { got: usize, min: usize },
}

impl GearError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        GearError::DegenerateInput {
            reason: reason.into(),
        }
    }
}

/// Fails with [`GearError::DegenerateInput`] unless `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &str, value: Real) -> Result<(), GearError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GearError::degenerate(format!(
            "{name} must be a finite value > 0, got {value}"
        )))
    }
}

/// Fails with [`GearError::DegenerateInput`] unless `value` is finite and not negative.
pub(crate) fn require_non_negative(name: &str, value: Real) -> Result<(), GearError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GearError::degenerate(format!(
            "{name} must be a finite value >= 0, got {value}"
        )))
    }
}
