use super::*;

#[test]
fn frame_index_wraps_at_rotation_end() {
    assert_eq!(FrameIndex(0).next_wrapping(4), FrameIndex(1));
    assert_eq!(FrameIndex(3).next_wrapping(4), FrameIndex(0));
    assert_eq!(FrameIndex(7).next_wrapping(0), FrameIndex(0));
}

#[test]
fn canvas_rejects_empty_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(200, 100).unwrap();
    assert_eq!(c.center(), Point::new(100.0, 50.0));
    assert_eq!(c.inner_radius(), 50.0);
}

#[test]
fn premul_straight_roundtrip_for_opaque_and_half() {
    let opaque = Rgba8Premul::from_straight_rgba(10, 20, 30, 255);
    assert_eq!(opaque.to_straight_rgba(), [10, 20, 30, 255]);

    let half = Rgba8Premul::from_rgb_alpha(200, 100, 0, 0.5);
    assert_eq!(half.a, 128);
    let [r, g, b, _] = half.to_straight_rgba();
    assert!((i32::from(r) - 200).abs() <= 1);
    assert!((i32::from(g) - 100).abs() <= 1);
    assert_eq!(b, 0);

    assert_eq!(Rgba8Premul::transparent().to_straight_rgba(), [0, 0, 0, 0]);
}
