use std::f64::consts::{FRAC_PI_2, PI};

use super::*;
use crate::curve::sampler::{ThetaDomain, sample};
use crate::foundation::core::FrameIndex;

fn viewport() -> PolarViewport {
    PolarViewport::new(Canvas::new(200, 200).unwrap(), 2.0).unwrap()
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn viewport_maps_axes_counter_clockwise() {
    let vp = viewport();
    // inner radius 100, margin 24 -> 76 px for 2 units.
    assert!((vp.scale() - 38.0).abs() < 1e-12);
    assert!(close(vp.to_px(PolarPoint::new(0.0, 0.0)), Point::new(100.0, 100.0)));
    assert!(close(vp.to_px(PolarPoint::new(0.0, 2.0)), Point::new(176.0, 100.0)));
    assert!(close(vp.to_px(PolarPoint::new(FRAC_PI_2, 1.0)), Point::new(100.0, 62.0)));
}

#[test]
fn reflected_and_raw_points_land_on_same_pixel() {
    let vp = viewport();
    let raw = PolarPoint::new(0.3, -1.5);
    let norm = PolarPoint::normalized(0.3, -1.5);
    assert!(close(vp.to_px(raw), vp.to_px(norm)));
}

#[test]
fn viewport_rejects_bad_limits_and_tiny_canvas() {
    let canvas = Canvas::new(200, 200).unwrap();
    assert!(PolarViewport::new(canvas, 0.0).is_err());
    assert!(PolarViewport::new(canvas, f64::NAN).is_err());
    assert!(PolarViewport::new(Canvas::new(40, 40).unwrap(), 1.0).is_err());
}

#[test]
fn plot_scene_has_grid_then_curve() {
    let vp = viewport();
    let circle = |_theta: f64| 1.0;
    let samples = sample(&circle, ThetaDomain::full_turn_closed(), 64);
    let scene = compile_plot(&vp, &samples);

    assert_eq!(scene.ops.len(), 3);
    assert!(matches!(scene.ops[0], DrawOp::Stroke { style, .. } if style == style::GRID));
    assert!(matches!(scene.ops[1], DrawOp::Stroke { style, .. } if style == style::GRID_OUTER));
    let DrawOp::Stroke { path, style } = &scene.ops[2] else {
        panic!("curve must be a stroke");
    };
    assert_eq!(*style, style::PLOT_CURVE);
    assert_eq!(path.elements().len(), 64);
}

#[test]
fn polyline_breaks_on_non_finite_points() {
    let vp = viewport();
    let pts = [
        PolarPoint::new(0.0, 1.0),
        PolarPoint::new(0.1, 1.0),
        PolarPoint::new(0.2, f64::INFINITY),
        PolarPoint::new(0.3, 1.0),
        PolarPoint::new(0.4, 1.0),
    ];
    let path = polyline(&vp, &pts);
    let moves = path
        .elements()
        .iter()
        .filter(|el| matches!(el, kurbo::PathEl::MoveTo(_)))
        .count();
    assert_eq!(moves, 2);
    assert_eq!(path.elements().len(), 4);
}

#[test]
fn frame_scene_draws_hollow_marker_only_when_reflected() {
    let vp = viewport();
    let rose = |theta: f64| 1.5 * (3.0 * theta).cos();
    let reference = sample(&rose, ThetaDomain::full_turn_closed(), 200);

    let positive = FrameState::compute(&rose, FrameIndex(0), 12);
    let scene = compile_frame(&vp, &reference, &positive, [0.0]);
    let markers = scene
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Stroke { style, .. } | DrawOp::Fill { style, .. } if *style == style::MARKER))
        .count();
    assert_eq!(markers, 1);
    assert!(matches!(scene.ops.last(), Some(DrawOp::Fill { .. })));

    // Frame 2 of 12 is θ = π/3 where r = 1.5·cos(π) < 0.
    let negative = FrameState::compute(&rose, FrameIndex(2), 12);
    assert!(negative.r < 0.0);
    let scene = compile_frame(&vp, &reference, &negative, [0.0]);
    let markers = scene
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Stroke { style, .. } | DrawOp::Fill { style, .. } if *style == style::MARKER))
        .count();
    assert_eq!(markers, 2);
}

#[test]
fn empty_trail_adds_no_layer() {
    let vp = viewport();
    let circle = |_theta: f64| 1.0;
    let frame = FrameState::compute(&circle, FrameIndex(0), 8);
    let with = compile_frame(&vp, &[], &frame, [0.0, PI]);
    let without = compile_frame(&vp, &[], &frame, std::iter::empty());
    assert_eq!(with.ops.len(), without.ops.len() + 1);
}

#[test]
fn dashed_line_alternates_segments() {
    let path = dashed_line(Point::new(0.0, 0.0), Point::new(25.0, 0.0));
    // Dashes at [0,6], [10,16], [20,25].
    assert_eq!(path.elements().len(), 6);
    assert!(dashed_line(Point::ORIGIN, Point::ORIGIN).elements().is_empty());
}
