use std::time::Instant;

/// Monotonic time source for the throttle gate.
pub trait Clock {
    fn now(&self) -> Instant;
}
