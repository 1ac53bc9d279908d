use std::f64::consts::FRAC_PI_4;

use kurbo::Shape;

use crate::animation::frame::FrameState;
use crate::curve::point::PolarPoint;
use crate::foundation::core::{BezPath, Canvas, Point, Rgba8Premul};
use crate::foundation::error::{PolarError, PolarResult};

/// Pixels kept free between the outer grid ring and the canvas edge.
pub const DEFAULT_MARGIN_PX: f64 = 24.0;

const GRID_RINGS: u32 = 4;
const GRID_SPOKES: u32 = 8;
const MARKER_RADIUS_PX: f64 = 4.0;
const DASH_PX: f64 = 6.0;
const GAP_PX: f64 = 4.0;
const CIRCLE_TOLERANCE: f64 = 0.1;

/// Stroke/fill style for one scene layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStyle {
    /// Paint color.
    pub color: Rgba8Premul,
    /// Stroke width in pixels (ignored for fills).
    pub width: f64,
}

impl LayerStyle {
    const fn new(color: Rgba8Premul, width: f64) -> Self {
        Self { color, width }
    }
}

const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba8Premul {
    // Callers only pass pre-multiplied constants.
    Rgba8Premul { r, g, b, a }
}

/// Layer styles used by [`compile_plot`] and [`compile_frame`].
pub mod style {
    use super::{LayerStyle, rgba};

    /// Background fill (white).
    pub const BACKGROUND: LayerStyle = LayerStyle::new(rgba(255, 255, 255, 255), 0.0);
    /// Grid rings and spokes.
    pub const GRID: LayerStyle = LayerStyle::new(rgba(204, 204, 204, 255), 1.0);
    /// Outer grid ring.
    pub const GRID_OUTER: LayerStyle = LayerStyle::new(rgba(110, 110, 110, 255), 1.0);
    /// Static plot curve.
    pub const PLOT_CURVE: LayerStyle = LayerStyle::new(rgba(0, 0, 255, 255), 1.5);
    /// Reference curve behind an animation (light gray, 60% opacity).
    pub const REFERENCE: LayerStyle = LayerStyle::new(rgba(127, 127, 127, 153), 1.5);
    /// Persistent trail ray (blue, 20% opacity).
    pub const TRAIL: LayerStyle = LayerStyle::new(rgba(0, 0, 51, 51), 0.5);
    /// Rotating ray (blue, 50% opacity).
    pub const RAY: LayerStyle = LayerStyle::new(rgba(0, 0, 128, 128), 1.5);
    /// Dashed opposite ray (navy, 50% opacity).
    pub const OPPOSITE_RAY: LayerStyle = LayerStyle::new(rgba(0, 0, 64, 128), 1.0);
    /// Curve traced so far.
    pub const TRACED: LayerStyle = LayerStyle::new(rgba(0, 0, 255, 255), 2.5);
    /// Filled and hollow point markers.
    pub const MARKER: LayerStyle = LayerStyle::new(rgba(255, 0, 0, 255), 1.5);
}

/// Maps polar coordinates to canvas pixels.
///
/// θ = 0 points right and angles grow counter-clockwise; the radial axis spans
/// `[0, radial_limit]` from the canvas center to the outer grid ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarViewport {
    /// Output canvas.
    pub canvas: Canvas,
    /// Radius shown at the outer grid ring.
    pub radial_limit: f64,
    /// Free space around the outer ring, in pixels.
    pub margin_px: f64,
}

impl PolarViewport {
    /// Viewport with [`DEFAULT_MARGIN_PX`].
    pub fn new(canvas: Canvas, radial_limit: f64) -> PolarResult<Self> {
        if !(radial_limit.is_finite() && radial_limit > 0.0) {
            return Err(PolarError::validation(
                "viewport radial limit must be positive and finite",
            ));
        }
        if canvas.inner_radius() <= DEFAULT_MARGIN_PX {
            return Err(PolarError::validation("canvas too small for plot margin"));
        }
        Ok(Self {
            canvas,
            radial_limit,
            margin_px: DEFAULT_MARGIN_PX,
        })
    }

    /// Pixels per radial unit.
    pub fn scale(&self) -> f64 {
        (self.canvas.inner_radius() - self.margin_px) / self.radial_limit
    }

    /// Outer ring radius in pixels.
    pub fn outer_radius_px(&self) -> f64 {
        self.radial_limit * self.scale()
    }

    /// Pixel position of a polar point (y grows downwards).
    pub fn to_px(&self, p: PolarPoint) -> Point {
        let c = self.canvas.center();
        let xy = p.to_cartesian();
        let s = self.scale();
        Point::new(c.x + xy.x * s, c.y - xy.y * s)
    }

    fn ray_end(&self, angle: f64) -> Point {
        self.to_px(PolarPoint::new(angle, self.radial_limit))
    }
}

/// One draw operation, in pixel space.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Stroke `path` with `style.width`.
    Stroke {
        /// Path in pixels.
        path: BezPath,
        /// Paint and width.
        style: LayerStyle,
    },
    /// Fill `path` (non-zero winding).
    Fill {
        /// Path in pixels.
        path: BezPath,
        /// Paint.
        style: LayerStyle,
    },
}

/// Flat, ordered draw list for one image.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Output canvas.
    pub canvas: Canvas,
    /// Background fill.
    pub background: Rgba8Premul,
    /// Draw operations in painter's order.
    pub ops: Vec<DrawOp>,
}

impl Scene {
    fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            background: style::BACKGROUND.color,
            ops: Vec::new(),
        }
    }

    fn stroke(&mut self, path: BezPath, style: LayerStyle) {
        if !path.elements().is_empty() {
            self.ops.push(DrawOp::Stroke { path, style });
        }
    }

    fn fill(&mut self, path: BezPath, style: LayerStyle) {
        if !path.elements().is_empty() {
            self.ops.push(DrawOp::Fill { path, style });
        }
    }
}

/// Draw list for a static plot of `samples`.
pub fn compile_plot(viewport: &PolarViewport, samples: &[PolarPoint]) -> Scene {
    let mut scene = Scene::new(viewport.canvas);
    push_grid(&mut scene, viewport);
    scene.stroke(polyline(viewport, samples), style::PLOT_CURVE);
    scene
}

/// Draw list for one animation frame.
///
/// Layers, bottom to top: grid, reference curve, trail rays, ray, dashed opposite ray, traced
/// curve, hollow marker, filled point.
pub fn compile_frame(
    viewport: &PolarViewport,
    reference: &[PolarPoint],
    frame: &FrameState,
    trail: impl IntoIterator<Item = f64>,
) -> Scene {
    let mut scene = Scene::new(viewport.canvas);
    let center = viewport.canvas.center();
    push_grid(&mut scene, viewport);
    scene.stroke(polyline(viewport, reference), style::REFERENCE);

    let mut trail_path = BezPath::new();
    for angle in trail {
        trail_path.move_to(center);
        trail_path.line_to(viewport.ray_end(angle));
    }
    scene.stroke(trail_path, style::TRAIL);

    let mut ray = BezPath::new();
    ray.move_to(center);
    ray.line_to(viewport.ray_end(frame.ray_angle));
    scene.stroke(ray, style::RAY);

    scene.stroke(
        dashed_line(center, viewport.ray_end(frame.opposite_ray_angle)),
        style::OPPOSITE_RAY,
    );

    scene.stroke(polyline(viewport, &frame.traced), style::TRACED);

    if let Some(hollow) = frame.marker.hollow {
        scene.stroke(marker(viewport, hollow), style::MARKER);
    }
    scene.fill(marker(viewport, frame.marker.filled), style::MARKER);
    scene
}

fn push_grid(scene: &mut Scene, viewport: &PolarViewport) {
    let center = viewport.canvas.center();
    let outer = viewport.outer_radius_px();

    let mut rings = BezPath::new();
    for k in 1..GRID_RINGS {
        let r = outer * f64::from(k) / f64::from(GRID_RINGS);
        rings.extend(kurbo::Circle::new(center, r).path_elements(CIRCLE_TOLERANCE));
    }
    for k in 0..GRID_SPOKES {
        let angle = f64::from(k) * FRAC_PI_4;
        rings.move_to(center);
        rings.line_to(viewport.ray_end(angle));
    }
    scene.stroke(rings, style::GRID);
    scene.stroke(
        kurbo::Circle::new(center, outer).to_path(CIRCLE_TOLERANCE),
        style::GRID_OUTER,
    );
}

/// Connect consecutive points; non-finite points break the line.
fn polyline(viewport: &PolarViewport, points: &[PolarPoint]) -> BezPath {
    let mut path = BezPath::new();
    let mut pen_down = false;
    for &p in points {
        if !(p.theta.is_finite() && p.r.is_finite()) {
            pen_down = false;
            continue;
        }
        let px = viewport.to_px(p);
        if pen_down {
            path.line_to(px);
        } else {
            path.move_to(px);
            pen_down = true;
        }
    }
    path
}

fn dashed_line(from: Point, to: Point) -> BezPath {
    let mut path = BezPath::new();
    let delta = to - from;
    let len = delta.hypot();
    if !(len.is_finite() && len > 0.0) {
        return path;
    }
    let dir = delta / len;
    let mut at = 0.0;
    while at < len {
        let end = (at + DASH_PX).min(len);
        path.move_to(from + dir * at);
        path.line_to(from + dir * end);
        at = end + GAP_PX;
    }
    path
}

fn marker(viewport: &PolarViewport, p: PolarPoint) -> BezPath {
    if !(p.theta.is_finite() && p.r.is_finite()) {
        return BezPath::new();
    }
    kurbo::Circle::new(viewport.to_px(p), MARKER_RADIUS_PX).to_path(CIRCLE_TOLERANCE)
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
