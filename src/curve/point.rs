use std::f64::consts::PI;

use crate::foundation::core::Point;

/// A point in polar coordinates.
///
/// Points produced by [`PolarPoint::normalized`] (and therefore by the sampler) carry a
/// non-negative radius whenever the source radius is finite.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PolarPoint {
    /// Angle in radians.
    pub theta: f64,
    /// Radius.
    pub r: f64,
}

impl PolarPoint {
    /// Raw point, no normalization.
    pub const fn new(theta: f64, r: f64) -> Self {
        Self { theta, r }
    }

    /// Point at the origin seen along `theta`.
    pub const fn origin_at(theta: f64) -> Self {
        Self { theta, r: 0.0 }
    }

    /// Equivalent point with a non-negative radius.
    ///
    /// `(θ, r)` with `r < 0` becomes `(θ + π, |r|)`. Non-finite radii are not filtered: NaN
    /// takes the reflected branch and stays NaN.
    pub fn normalized(theta: f64, r: f64) -> Self {
        if r >= 0.0 {
            Self { theta, r }
        } else {
            Self {
                theta: theta + PI,
                r: r.abs(),
            }
        }
    }

    /// Whether the radius was reflected by [`PolarPoint::normalized`].
    pub fn needs_reflection(r: f64) -> bool {
        r < 0.0 || r.is_nan()
    }

    /// Cartesian position `(r cos θ, r sin θ)`.
    pub fn to_cartesian(self) -> Point {
        let (sin, cos) = self.theta.sin_cos();
        Point::new(self.r * cos, self.r * sin)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/point.rs"]
mod tests;
