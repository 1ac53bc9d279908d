//! polarvis samples and animates polar curves `r = f(θ)`.
//!
//! # Pipeline overview
//!
//! 1. **Select**: `get_equation(name) -> Equation`, then `Equation::bind(&Coefficients)` resolves
//!    the coefficient values into a [`BoundEquation`].
//! 2. **Sample**: `sample(curve, domain, resolution) -> Vec<PolarPoint>`, every point normalized
//!    to a non-negative radius (`(θ, r < 0)` becomes `(θ + π, |r|)`).
//! 3. **Animate**: an [`Animator`] steps a frame index through one rotation and exposes a
//!    [`FrameState`] (angle, raw radius, traced sub-curve, rays, marker placement) per tick.
//! 4. **Render** (optional): `compile_plot` / `compile_frame` build a pixel-space [`Scene`] that
//!    [`CpuRenderer`] rasterizes into a [`FrameRGBA`].
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No global state**: playback state lives in the caller-owned [`Animator`].
//! - **Caller-driven time**: ticks are fired from `Animator::advance(dt, sink)`, so the state
//!   machine is independent of any windowing toolkit.
//! - **Pure sampling**: the sampler never validates or filters; non-finite radii propagate.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod curve;
mod equation;
mod foundation;
mod render;

pub use animation::animator::{
    AnimationOpts, Animator, DEFAULT_FRAMES, FrameLog, FrameSink, PlaybackState,
};
pub use animation::clock::{
    DEFAULT_SPEED, MAX_SPEED, MIN_SPEED, TickClock, interval_for_speed,
};
pub use animation::frame::{FrameState, MarkerState, theta_for_frame};
pub use animation::trail::{RayTrail, TRAIL_EVERY, TRAIL_POLICY_ENV, TrailPolicy};
pub use curve::point::PolarPoint;
pub use curve::sampler::{
    PolarCurve, RADIAL_HEADROOM, REFERENCE_RESOLUTION, TRACE_RESOLUTION, ThetaDomain,
    radial_limit, sample,
};
pub use equation::coeffs::{CoefficientSpec, Coefficients, DEFAULT_STEP};
pub use equation::registry::{BoundEquation, Equation, EquationKind, equations, get_equation};
pub use foundation::core::{BezPath, Canvas, FrameIndex, Point, Rgba8Premul, Vec2};
pub use foundation::error::{PolarError, PolarResult};
pub use render::cpu::{CpuRenderer, FrameRGBA, RenderSettings};
pub use render::scene::{
    DEFAULT_MARGIN_PX, DrawOp, LayerStyle, PolarViewport, Scene, compile_frame, compile_plot,
    style,
};
