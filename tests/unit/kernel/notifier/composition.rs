use super::*;

#[test]
fn starts_idle_and_admits_input() {
    let guard = CompositionGuard::new();
    assert!(!guard.is_composing());
    assert!(guard.admits_input());
}

#[test]
fn composing_suppresses_input_until_end() {
    let mut guard = CompositionGuard::new();
    guard.start();
    assert!(guard.is_composing());
    assert!(!guard.admits_input());

    assert_eq!(guard.end(), CompositionState::Composing);
    assert!(!guard.is_composing());
    assert!(guard.admits_input());
}

#[test]
fn end_without_start_reports_idle() {
    let mut guard = CompositionGuard::new();
    assert_eq!(guard.end(), CompositionState::Idle);
    assert!(guard.admits_input());
}

#[test]
fn repeated_start_stays_composing() {
    let mut guard = CompositionGuard::new();
    guard.start();
    guard.start();
    assert!(guard.is_composing());
    guard.end();
    assert!(!guard.is_composing());
}
