//! Frame binder: keeps listeners attached to at most one frame document.

use crate::core::event::{ListenerOptions, RawEventKind};
use crate::core::id::DocumentId;
use crate::kernel::services::ports::{FrameDocument, Listener};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    /// The document was already bound; nothing changed.
    AlreadyBound,
    /// Listeners were attached. `replaced` is the document detached first.
    Bound { replaced: Option<DocumentId> },
}

/// A document together with the registrations attached to it.
///
/// Holding a `Binding` is the only way listeners exist on a document, so a
/// bound document always has exactly one set of listeners.
struct Binding<D: FrameDocument> {
    document: D,
    registrations: Vec<(RawEventKind, ListenerOptions, D::Registration)>,
}

impl<D: FrameDocument> Binding<D> {
    fn attach(
        document: D,
        mut listener_for: impl FnMut(RawEventKind) -> Listener<D::Element>,
    ) -> Self {
        let registrations = RawEventKind::ALL
            .iter()
            .map(|&kind| {
                let options = kind.listener_options();
                let registration = document.add_event_listener(kind, options, listener_for(kind));
                (kind, options, registration)
            })
            .collect();
        Self {
            document,
            registrations,
        }
    }

    fn detach(self) -> DocumentId {
        let id = self.document.id();
        for (kind, options, registration) in self.registrations {
            self.document.remove_event_listener(kind, options, registration);
        }
        id
    }
}

pub struct FrameBinder<D: FrameDocument> {
    binding: Option<Binding<D>>,
}

impl<D: FrameDocument> FrameBinder<D> {
    pub fn new() -> Self {
        Self { binding: None }
    }

    pub fn bound_document(&self) -> Option<DocumentId> {
        self.binding.as_ref().map(|b| b.document.id())
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub fn is_bound_to(&self, id: DocumentId) -> bool {
        self.bound_document() == Some(id)
    }

    /// Attaches one listener per raw event kind to `document`.
    ///
    /// Binding the already-bound document is a no-op. Binding a different one
    /// detaches the previous document first.
    pub fn bind(
        &mut self,
        document: D,
        listener_for: impl FnMut(RawEventKind) -> Listener<D::Element>,
    ) -> BindOutcome {
        if self.is_bound_to(document.id()) {
            return BindOutcome::AlreadyBound;
        }
        let replaced = self.unbind();
        self.binding = Some(Binding::attach(document, listener_for));
        BindOutcome::Bound { replaced }
    }

    /// Removes every listener from the bound document. Returns its id, or
    /// `None` when nothing was bound.
    pub fn unbind(&mut self) -> Option<DocumentId> {
        self.binding.take().map(Binding::detach)
    }
}

impl<D: FrameDocument> Default for FrameBinder<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/notifier/binder.rs"]
mod tests;
