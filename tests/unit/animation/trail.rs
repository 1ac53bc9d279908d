use super::*;

#[test]
fn records_only_every_tenth_frame() {
    let mut trail = RayTrail::new(TrailPolicy::Bounded, 200);
    let added: Vec<u64> = (0..35)
        .filter(|&i| trail.record(FrameIndex(i), i as f64))
        .collect();
    assert_eq!(added, vec![0, 10, 20, 30]);
    assert_eq!(trail.angles().collect::<Vec<_>>(), vec![0.0, 10.0, 20.0, 30.0]);
}

#[test]
fn bounded_trail_holds_one_rotation() {
    let frames = 200;
    let mut trail = RayTrail::new(TrailPolicy::Bounded, frames);
    assert_eq!(trail.capacity(), Some(20));

    // Three full rotations.
    for step in 0..(3 * frames) {
        let i = step % frames;
        trail.record(FrameIndex(i), i as f64);
    }
    assert_eq!(trail.len(), 20);
    let angles: Vec<f64> = trail.angles().collect();
    assert_eq!(angles.first(), Some(&0.0));
    assert_eq!(angles.last(), Some(&190.0));
}

#[test]
fn bounded_capacity_rounds_up_and_is_never_zero() {
    assert_eq!(RayTrail::new(TrailPolicy::Bounded, 15).capacity(), Some(2));
    assert_eq!(RayTrail::new(TrailPolicy::Bounded, 4).capacity(), Some(1));
    assert_eq!(RayTrail::new(TrailPolicy::Bounded, 0).capacity(), Some(1));
}

#[test]
fn unbounded_trail_keeps_growing() {
    let frames = 40;
    let mut trail = RayTrail::new(TrailPolicy::Unbounded, frames);
    for step in 0..(5 * frames) {
        trail.record(FrameIndex(step % frames), 0.0);
    }
    assert_eq!(trail.capacity(), None);
    assert_eq!(trail.len(), 20);
}

#[test]
fn policy_parsing() {
    assert_eq!(TrailPolicy::parse("Bounded"), Some(TrailPolicy::Bounded));
    assert_eq!(TrailPolicy::parse(" unbounded "), Some(TrailPolicy::Unbounded));
    assert_eq!(TrailPolicy::parse("ring"), None);
    assert_eq!(TrailPolicy::default(), TrailPolicy::Bounded);
}
