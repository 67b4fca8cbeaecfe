//! Contracts for the sub-frame document the editor renders into.

use std::rc::Rc;

use crate::core::event::{ListenerOptions, RawEvent, RawEventKind};
use crate::core::id::DocumentId;

pub type Listener<E> = Rc<dyn Fn(&RawEvent<E>)>;

/// A concrete rendered element.
pub trait EditableElement: Clone + 'static {
    /// True when the user can edit this element directly (content-editable).
    fn is_content_editable(&self) -> bool;

    /// Current rendered plain text.
    fn inner_text(&self) -> String;
}

/// A sub-frame document that accepts event listeners.
///
/// Clones are handles to the same document and share its `id`.
pub trait FrameDocument: Clone + 'static {
    type Element: EditableElement;
    /// Token returned by `add_event_listener`, consumed on removal.
    type Registration: 'static;

    fn id(&self) -> DocumentId;

    fn add_event_listener(
        &self,
        kind: RawEventKind,
        options: ListenerOptions,
        listener: Listener<Self::Element>,
    ) -> Self::Registration;

    fn remove_event_listener(
        &self,
        kind: RawEventKind,
        options: ListenerOptions,
        registration: Self::Registration,
    );
}
