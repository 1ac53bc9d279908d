use super::*;

#[test]
fn zero_interval_is_rejected() {
    assert!(TickClock::new(Duration::ZERO).is_err());
}

#[test]
fn partial_intervals_carry_over() {
    let mut clock = TickClock::new(Duration::from_millis(50)).unwrap();
    assert_eq!(clock.advance(Duration::from_millis(30)), 0);
    assert_eq!(clock.pending(), Duration::from_millis(30));
    assert_eq!(clock.advance(Duration::from_millis(30)), 1);
    assert_eq!(clock.pending(), Duration::from_millis(10));
    assert_eq!(clock.advance(Duration::from_millis(145)), 3);
    assert_eq!(clock.pending(), Duration::from_millis(5));
}

#[test]
fn reset_discards_pending_time() {
    let mut clock = TickClock::new(Duration::from_millis(10)).unwrap();
    clock.advance(Duration::from_millis(7));
    clock.reset();
    assert_eq!(clock.pending(), Duration::ZERO);
    assert_eq!(clock.advance(Duration::from_millis(7)), 0);
}

#[test]
fn speed_maps_to_interval() {
    assert_eq!(interval_for_speed(DEFAULT_SPEED), Duration::from_millis(50));
    assert_eq!(interval_for_speed(2), Duration::from_millis(98));
    assert_eq!(interval_for_speed(0), Duration::from_millis(98));
    assert_eq!(interval_for_speed(99), Duration::from_millis(1));
    assert_eq!(interval_for_speed(100), Duration::from_millis(1));
    assert_eq!(interval_for_speed(500), Duration::from_millis(1));
}

#[test]
fn take_tick_consumes_one_interval_at_a_time() {
    let mut clock = TickClock::new(Duration::from_millis(10)).unwrap();
    clock.accumulate(Duration::from_millis(25));
    assert_eq!(clock.due(), 2);
    assert!(clock.take_tick());
    assert_eq!(clock.due(), 1);
    assert!(clock.take_tick());
    assert!(!clock.take_tick());
    assert_eq!(clock.pending(), Duration::from_millis(5));
}

#[test]
fn drop_overdue_keeps_limit_and_remainder() {
    let mut clock = TickClock::new(Duration::from_millis(10)).unwrap();
    clock.accumulate(Duration::from_millis(1_003));
    assert_eq!(clock.drop_overdue(20), 80);
    assert_eq!(clock.due(), 20);
    assert_eq!(clock.pending(), Duration::from_millis(203));

    assert_eq!(clock.drop_overdue(20), 0);
    assert_eq!(clock.pending(), Duration::from_millis(203));
}

#[test]
fn huge_stall_saturates_instead_of_overflowing() {
    let mut clock = TickClock::new(Duration::from_millis(1)).unwrap();
    clock.accumulate(Duration::MAX);
    assert_eq!(clock.due(), u64::MAX);
    assert_eq!(clock.drop_overdue(3), u64::MAX);
    assert_eq!(clock.due(), 3);
    assert!(clock.pending() < Duration::from_millis(4));

    let mut clock = TickClock::new(Duration::from_millis(1)).unwrap();
    assert_eq!(clock.advance(Duration::MAX), u64::MAX);
    assert!(clock.pending() < Duration::from_millis(1));
}
