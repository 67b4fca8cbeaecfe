//! The editor host as seen by the change notifier.

use crate::core::event::{LifecycleHook, NotificationKind, RawEvent};

use super::frame::{EditableElement, FrameDocument};

pub type LifecycleCallback = Box<dyn Fn()>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The host's view lookup failed.
    Lookup(String),
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::Lookup(msg) => write!(f, "view lookup failed: {}", msg),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Capabilities consumed from the host editor.
pub trait EditorHost: 'static {
    /// Opaque logical-component handle.
    type Component: Clone + 'static;
    type Element: EditableElement;
    type Document: FrameDocument<Element = Self::Element>;

    /// The component the user currently has selected, if any.
    fn selected(&self) -> Option<Self::Component>;

    /// The component owning the view rendered at `element`.
    fn resolve_view_owner(
        &self,
        element: &Self::Element,
    ) -> Result<Option<Self::Component>, ResolveError>;

    /// The document of the current frame, if a render surface exists.
    fn frame_document(&self) -> Option<Self::Document>;

    /// Fire-and-forget publish on the host bus.
    fn trigger(&self, kind: NotificationKind, payload: TextChange<Self::Component, Self::Element>);

    /// Subscribe to a lifecycle hook.
    fn on(&self, hook: LifecycleHook, callback: LifecycleCallback);
}

/// Payload carried by `text:input` and `text:commit`.
#[derive(Debug, Clone)]
pub struct TextChange<C, E> {
    pub component: C,
    /// Plain text of `element`, read at dispatch time.
    pub text: String,
    pub element: E,
    pub event: RawEvent<E>,
}

impl<C, E> TextChange<C, E> {
    pub fn new(component: C, text: impl Into<String>, element: E, event: RawEvent<E>) -> Self {
        Self {
            component,
            text: text.into(),
            element,
            event,
        }
    }
}
