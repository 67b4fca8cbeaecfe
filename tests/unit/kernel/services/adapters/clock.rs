use super::*;

#[test]
fn manual_clock_moves_only_when_advanced() {
    let start = Instant::now();
    let clock = ManualClock::starting_at(start);
    assert_eq!(clock.now(), start);

    clock.advance_ms(150);
    assert_eq!(clock.now(), start + Duration::from_millis(150));
}

#[test]
fn manual_clock_clones_share_time() {
    let clock = ManualClock::new();
    let other = clock.clone();
    other.advance(Duration::from_secs(1));
    assert_eq!(clock.now(), other.now());
}

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock;
    let a = clock.now();
    let b = clock.now();
    assert!(b >= a);
}
