use std::f64::consts::{PI, TAU};

use crate::curve::point::PolarPoint;
use crate::curve::sampler::{PolarCurve, TRACE_RESOLUTION, ThetaDomain, sample};
use crate::foundation::core::FrameIndex;

/// Angle of `frame` within a rotation of `frames` frames: `2π·i/frames`.
pub fn theta_for_frame(frame: FrameIndex, frames: u64) -> f64 {
    if frames == 0 {
        return 0.0;
    }
    TAU * (frame.0 as f64) / (frames as f64)
}

/// Where the tracing point is drawn for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MarkerState {
    /// Filled point on the curve, always at a non-negative radius.
    pub filled: PolarPoint,
    /// Hollow marker at the pole on the unreflected angle, present only when `r < 0`.
    pub hollow: Option<PolarPoint>,
}

impl MarkerState {
    /// Marker placement for radius `r` at angle `theta`.
    pub fn place(theta: f64, r: f64) -> Self {
        if PolarPoint::needs_reflection(r) {
            Self {
                filled: PolarPoint::normalized(theta, r),
                hollow: Some(PolarPoint::origin_at(theta)),
            }
        } else {
            Self {
                filled: PolarPoint::new(theta, r),
                hollow: None,
            }
        }
    }
}

/// Drawable state of one animation frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameState {
    /// Frame index within the rotation.
    pub frame: FrameIndex,
    /// Frames per rotation.
    pub frames: u64,
    /// Current angle `θ_i`.
    pub theta: f64,
    /// Raw radius `f(θ_i)`, possibly negative.
    pub r: f64,
    /// Normalized samples of the curve over `[0, θ_i]`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub traced: Vec<PolarPoint>,
    /// Angle of the rotating ray.
    pub ray_angle: f64,
    /// Angle of the dashed ray half a turn behind.
    pub opposite_ray_angle: f64,
    /// Point marker placement.
    pub marker: MarkerState,
}

impl FrameState {
    /// Evaluate `curve` for `frame` of a `frames`-frame rotation.
    pub fn compute<C: PolarCurve + ?Sized>(curve: &C, frame: FrameIndex, frames: u64) -> Self {
        let theta = theta_for_frame(frame, frames);
        let r = curve.radius(theta);
        Self {
            frame,
            frames,
            theta,
            r,
            traced: sample(curve, ThetaDomain::up_to(theta), TRACE_RESOLUTION),
            ray_angle: theta,
            opposite_ray_angle: theta + PI,
            marker: MarkerState::place(theta, r),
        }
    }

    /// Whether the current point was reflected through the origin.
    pub fn is_reflected(&self) -> bool {
        self.marker.hollow.is_some()
    }

    /// Angle/radius readout, e.g. `θ = 1.05 rad = 60.0°, r = -3.00`.
    pub fn readout(&self) -> String {
        let sign = if self.r >= 0.0 { "+" } else { "-" };
        format!(
            "θ = {:.2} rad = {:.1}°, r = {sign}{:.2}",
            self.theta,
            self.theta.to_degrees(),
            self.r.abs()
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/frame.rs"]
mod tests;
