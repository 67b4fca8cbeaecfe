//! In-memory frame document and elements.
//!
//! Dispatch follows the DOM rule the notifier relies on: bubbling events reach
//! every document listener, `blur` only reaches capture-phase listeners.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slotmap::SlotMap;

use crate::core::event::{ListenerOptions, RawEvent, RawEventKind};
use crate::core::id::{DocumentId, ElementId};
use crate::kernel::services::ports::{EditableElement, FrameDocument, Listener};

slotmap::new_key_type! {
    pub struct ListenerKey;
}

#[derive(Clone)]
pub struct MemoryElement {
    inner: Rc<ElementInner>,
}

struct ElementInner {
    id: ElementId,
    editable: Cell<bool>,
    text: RefCell<String>,
}

impl MemoryElement {
    pub fn new(text: impl Into<String>, editable: bool) -> Self {
        Self {
            inner: Rc::new(ElementInner {
                id: ElementId::next(),
                editable: Cell::new(editable),
                text: RefCell::new(text.into()),
            }),
        }
    }

    pub fn editable(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    pub fn id(&self) -> ElementId {
        self.inner.id
    }

    pub fn set_editable(&self, editable: bool) {
        self.inner.editable.set(editable);
    }

    pub fn set_text(&self, text: impl Into<String>) {
        *self.inner.text.borrow_mut() = text.into();
    }

    pub fn push_str(&self, s: &str) {
        self.inner.text.borrow_mut().push_str(s);
    }
}

impl EditableElement for MemoryElement {
    fn is_content_editable(&self) -> bool {
        self.inner.editable.get()
    }

    fn inner_text(&self) -> String {
        self.inner.text.borrow().clone()
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for MemoryElement {}

impl std::fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryElement")
            .field("id", &self.inner.id)
            .field("editable", &self.inner.editable.get())
            .field("text", &*self.inner.text.borrow())
            .finish()
    }
}

struct Registered {
    kind: RawEventKind,
    options: ListenerOptions,
    listener: Listener<MemoryElement>,
}

#[derive(Clone)]
pub struct MemoryDocument {
    inner: Rc<DocumentInner>,
}

struct DocumentInner {
    id: DocumentId,
    listeners: RefCell<SlotMap<ListenerKey, Registered>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(DocumentInner {
                id: DocumentId::next(),
                listeners: RefCell::new(SlotMap::with_key()),
            }),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn listener_count_for(&self, kind: RawEventKind) -> usize {
        self.inner
            .listeners
            .borrow()
            .values()
            .filter(|r| r.kind == kind)
            .count()
    }

    /// Delivers `event` to the document's listeners, capture phase first.
    /// Returns how many listeners ran.
    pub fn dispatch(&self, event: &RawEvent<MemoryElement>) -> usize {
        // Snapshot first: listeners may add or remove registrations.
        let (capture, bubble): (Vec<_>, Vec<_>) = {
            let listeners = self.inner.listeners.borrow();
            listeners
                .values()
                .filter(|r| r.kind == event.kind)
                .map(|r| (r.options.capture, Rc::clone(&r.listener)))
                .partition(|(capture, _)| *capture)
        };

        let mut ran = 0;
        for (_, listener) in capture {
            listener(event);
            ran += 1;
        }
        if event.kind.bubbles() {
            for (_, listener) in bubble {
                listener(event);
                ran += 1;
            }
        }
        ran
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MemoryDocument {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for MemoryDocument {}

impl std::fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryDocument")
            .field("id", &self.inner.id)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl FrameDocument for MemoryDocument {
    type Element = MemoryElement;
    type Registration = ListenerKey;

    fn id(&self) -> DocumentId {
        self.inner.id
    }

    fn add_event_listener(
        &self,
        kind: RawEventKind,
        options: ListenerOptions,
        listener: Listener<MemoryElement>,
    ) -> ListenerKey {
        self.inner.listeners.borrow_mut().insert(Registered {
            kind,
            options,
            listener,
        })
    }

    fn remove_event_listener(&self, kind: RawEventKind, options: ListenerOptions, key: ListenerKey) {
        let mut listeners = self.inner.listeners.borrow_mut();
        let matches = listeners
            .get(key)
            .is_some_and(|r| r.kind == kind && r.options == options);
        if matches {
            listeners.remove(key);
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/memory.rs"]
mod tests;
