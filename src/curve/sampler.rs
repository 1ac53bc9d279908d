use std::f64::consts::TAU;

use crate::curve::point::PolarPoint;

/// Samples used for the static/reference curve.
pub const REFERENCE_RESOLUTION: usize = 1000;
/// Samples used for the traced sub-curve of an animation frame.
pub const TRACE_RESOLUTION: usize = 100;
/// Radial axis headroom applied on top of the largest sampled radius.
pub const RADIAL_HEADROOM: f64 = 1.1;

/// A polar function `θ -> r`.
pub trait PolarCurve {
    /// Radius at `theta` (radians). May be negative or non-finite.
    fn radius(&self, theta: f64) -> f64;
}

impl<F> PolarCurve for F
where
    F: Fn(f64) -> f64,
{
    fn radius(&self, theta: f64) -> f64 {
        self(theta)
    }
}

/// Angular interval to partition when sampling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThetaDomain {
    /// First sampled angle.
    pub start: f64,
    /// Upper bound of the interval.
    pub end: f64,
    /// Whether `end` itself is sampled.
    pub inclusive_end: bool,
}

impl ThetaDomain {
    /// `[start, end)`.
    pub const fn half_open(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            inclusive_end: false,
        }
    }

    /// `[start, end]`.
    pub const fn closed(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            inclusive_end: true,
        }
    }

    /// One rotation, `[0, 2π)`.
    pub const fn full_turn() -> Self {
        Self::half_open(0.0, TAU)
    }

    /// The closed rotation `[0, 2π]`; the last sample meets the first for periodic curves.
    pub const fn full_turn_closed() -> Self {
        Self::closed(0.0, TAU)
    }

    /// Traced portion `[0, theta]` of an animation frame.
    pub const fn up_to(theta: f64) -> Self {
        Self::closed(0.0, theta)
    }

    /// The `i`-th of `resolution` uniformly spaced angles.
    pub fn theta_at(self, i: usize, resolution: usize) -> f64 {
        let divisions = if self.inclusive_end {
            resolution.saturating_sub(1)
        } else {
            resolution
        };
        if divisions == 0 {
            return self.start;
        }
        let t = i as f64 / divisions as f64;
        self.start + (self.end - self.start) * t
    }

    /// Iterator over `resolution` uniformly spaced angles.
    pub fn thetas(self, resolution: usize) -> impl Iterator<Item = f64> {
        (0..resolution).map(move |i| self.theta_at(i, resolution))
    }
}

/// Sample `curve` over `domain` and normalize every point to a non-negative radius.
///
/// No validation is done on the produced radii.
pub fn sample<C: PolarCurve + ?Sized>(
    curve: &C,
    domain: ThetaDomain,
    resolution: usize,
) -> Vec<PolarPoint> {
    domain
        .thetas(resolution)
        .map(|theta| PolarPoint::normalized(theta, curve.radius(theta)))
        .collect()
}

/// Radial axis limit for plotting `curve`: the largest reference radius magnitude plus
/// headroom.
///
/// Non-finite radii are ignored. Falls back to `1.0` when no positive finite limit exists.
pub fn radial_limit<C: PolarCurve + ?Sized>(curve: &C) -> f64 {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for theta in ThetaDomain::full_turn_closed().thetas(REFERENCE_RESOLUTION) {
        let r = curve.radius(theta);
        if !r.is_finite() {
            continue;
        }
        min = min.min(r);
        max = max.max(r);
    }

    let limit = RADIAL_HEADROOM * min.abs().max(max);
    if limit.is_finite() && limit > 0.0 {
        limit
    } else {
        1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/sampler.rs"]
mod tests;
