use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a sub-frame document.
///
/// Two handles to the same document compare equal by id, which is what the
/// frame binder uses to detect a no-op rebind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

/// Identity of an element inside a sub-frame document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

static NEXT_DOCUMENT: AtomicU64 = AtomicU64::new(1);
static NEXT_ELEMENT: AtomicU64 = AtomicU64::new(1);

impl DocumentId {
    pub const fn raw(v: u64) -> Self {
        Self(v)
    }

    /// Allocates a fresh id, never returned before in this process.
    pub fn next() -> Self {
        Self(NEXT_DOCUMENT.fetch_add(1, Ordering::Relaxed))
    }
}

impl ElementId {
    pub const fn raw(v: u64) -> Self {
        Self(v)
    }

    pub fn next() -> Self {
        Self(NEXT_ELEMENT.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "el#{}", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/id.rs"]
mod tests;
