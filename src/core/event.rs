//! Raw sub-frame events and the names of what the notifier re-emits.

/// Low-level event kinds the notifier listens for on a frame document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawEventKind {
    CompositionStart,
    CompositionEnd,
    Input,
    Blur,
}

impl RawEventKind {
    pub const ALL: [RawEventKind; 4] = [
        RawEventKind::CompositionStart,
        RawEventKind::CompositionEnd,
        RawEventKind::Input,
        RawEventKind::Blur,
    ];

    /// Focus loss does not bubble; a document only sees it in the capture phase.
    pub fn bubbles(self) -> bool {
        !matches!(self, RawEventKind::Blur)
    }

    /// Listener options the notifier registers this kind with.
    pub fn listener_options(self) -> ListenerOptions {
        match self {
            RawEventKind::Blur => ListenerOptions::capture(),
            _ => ListenerOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ListenerOptions {
    pub capture: bool,
}

impl ListenerOptions {
    pub fn capture() -> Self {
        Self { capture: true }
    }
}

/// A dispatched low-level event. `E` is the host's element handle.
#[derive(Debug, Clone)]
pub struct RawEvent<E> {
    pub kind: RawEventKind,
    pub target: Option<E>,
    /// Inserted or composed data, when the host provides it.
    pub data: Option<String>,
}

impl<E> RawEvent<E> {
    pub fn new(kind: RawEventKind, target: Option<E>) -> Self {
        Self {
            kind,
            target,
            data: None,
        }
    }

    pub fn input(target: E) -> Self {
        Self::new(RawEventKind::Input, Some(target))
    }

    pub fn composition_start(target: E) -> Self {
        Self::new(RawEventKind::CompositionStart, Some(target))
    }

    pub fn composition_end(target: E) -> Self {
        Self::new(RawEventKind::CompositionEnd, Some(target))
    }

    pub fn blur(target: E) -> Self {
        Self::new(RawEventKind::Blur, Some(target))
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn target(&self) -> Option<&E> {
        self.target.as_ref()
    }
}

/// Host editor lifecycle hooks the notifier subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleHook {
    /// A render surface exists and its frame document can be read.
    Loaded,
    /// Permanent teardown.
    Destroyed,
}

impl LifecycleHook {
    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleHook::Loaded => "load",
            LifecycleHook::Destroyed => "destroy",
        }
    }
}

/// Notifications published on the host bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Input,
    Commit,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Input => "text:input",
            NotificationKind::Commit => "text:commit",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
