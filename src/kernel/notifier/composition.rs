//! IME composition guard.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompositionState {
    #[default]
    Idle,
    Composing,
}

/// Tracks whether an IME composition sequence is in progress.
///
/// Ordinary input is suppressed while composing; the caller forces one
/// unthrottled report when `end` is observed.
#[derive(Debug, Clone, Default)]
pub struct CompositionGuard {
    state: CompositionState,
}

impl CompositionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_composing(&self) -> bool {
        self.state == CompositionState::Composing
    }

    /// Whether a plain input event may be reported.
    pub fn admits_input(&self) -> bool {
        !self.is_composing()
    }

    pub fn start(&mut self) {
        self.state = CompositionState::Composing;
    }

    /// Returns the state that was left.
    pub fn end(&mut self) -> CompositionState {
        std::mem::replace(&mut self.state, CompositionState::Idle)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/notifier/composition.rs"]
mod tests;
