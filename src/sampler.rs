//! Uniform sampling of a trochoid outline over one full turn.

use crate::errors::GearError;
use crate::float_types::{Real, TAU};
use crate::trochoid::{CurvePoint, GearSpec, evaluate};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Lazy, finite sequence of outline points.
///
/// Yields `point_count + 1` points at `θ_i = i / point_count · 2π` for
/// `i = 0..=point_count`, so the first and last point coincide. Cloning the
/// sampler (or calling [`ProfileSampler::restart`]) starts a fresh pass that
/// produces bit-identical points.
#[derive(Debug, Clone)]
pub struct ProfileSampler {
    gear: GearSpec,
    point_count: usize,
    front: usize,
    // one past the last index still to be yielded
    back: usize,
}

impl ProfileSampler {
    /// Minimal number of subdivisions of a full turn.
    pub const MIN_POINTS: usize = 2;

    pub fn new(gear: GearSpec, point_count: usize) -> Result<Self, GearError> {
        if point_count < Self::MIN_POINTS {
            return Err(GearError::TooFewPoints {
                got: point_count,
                min: Self::MIN_POINTS,
            });
        }
        let Some(back) = point_count.checked_add(1) else {
            return Err(GearError::degenerate(format!(
                "point_count {point_count} leaves no room for the closing point"
            )));
        };
        Ok(ProfileSampler {
            gear,
            point_count,
            front: 0,
            back,
        })
    }

    pub const fn gear(&self) -> &GearSpec {
        &self.gear
    }

    pub const fn point_count(&self) -> usize {
        self.point_count
    }

    /// A new sampler over the same gear and resolution, positioned at `θ = 0`.
    pub const fn restart(&self) -> Self {
        ProfileSampler {
            gear: self.gear,
            point_count: self.point_count,
            front: 0,
            // `new` rejects counts where this overflows
            back: self.point_count + 1,
        }
    }

    /// Sample angle of index `i`.
    #[inline]
    pub fn theta(&self, i: usize) -> Real {
        theta_at(i, self.point_count)
    }
}

#[inline]
fn theta_at(i: usize, point_count: usize) -> Real {
    (i as Real) / (point_count as Real) * TAU
}

impl Iterator for ProfileSampler {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        if self.front >= self.back {
            return None;
        }
        let theta = self.theta(self.front);
        self.front += 1;
        Some(evaluate(theta, &self.gear))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for ProfileSampler {
    fn next_back(&mut self) -> Option<CurvePoint> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(evaluate(self.theta(self.back), &self.gear))
    }
}

impl ExactSizeIterator for ProfileSampler {}

impl std::iter::FusedIterator for ProfileSampler {}

/// Sample `gear` with `point_count` subdivisions (`point_count + 1` points).
///
/// Fails with [`GearError::TooFewPoints`] when `point_count < 2` and with
/// [`GearError::DegenerateInput`] when `point_count + 1` is not a `usize`.
pub fn sample(gear: &GearSpec, point_count: usize) -> Result<ProfileSampler, GearError> {
    ProfileSampler::new(*gear, point_count)
}

/// Collect all sampled points, in order.
pub fn sample_vec(gear: &GearSpec, point_count: usize) -> Result<Vec<CurvePoint>, GearError> {
    let sampler = sample(gear, point_count)?;
    tracing::trace!(
        teeth = gear.teeth(),
        radius = gear.radius(),
        point_count,
        "sampling trochoid outline"
    );

    #[cfg(not(feature = "parallel"))]
    {
        Ok(sampler.collect())
    }

    #[cfg(feature = "parallel")]
    {
        // Every point depends only on its own index; rayon keeps index order on collect.
        let gear = *sampler.gear();
        Ok((0..=point_count)
            .into_par_iter()
            .map(|i| evaluate(theta_at(i, point_count), &gear))
            .collect())
    }
}
