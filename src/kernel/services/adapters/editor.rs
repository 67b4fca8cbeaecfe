//! In-memory editor host.
//!
//! Stands in for a real visual editor: owns the current frame document, a
//! selection, an element -> component view registry and lifecycle hooks, and
//! publishes notifications on a `notification_bus`.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::core::event::{LifecycleHook, NotificationKind};
use crate::core::id::ElementId;
use crate::kernel::services::bus::{notification_bus, NotificationReceiver, NotificationSender};
use crate::kernel::services::ports::{EditorHost, LifecycleCallback, ResolveError, TextChange};

use super::memory::{MemoryDocument, MemoryElement};

enum ViewEntry<C> {
    Owned(C),
    Broken(String),
}

pub struct MemoryEditor<C> {
    inner: Rc<EditorInner<C>>,
}

impl<C> Clone for MemoryEditor<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

struct EditorInner<C> {
    frame: RefCell<Option<MemoryDocument>>,
    selected: RefCell<Option<C>>,
    views: RefCell<FxHashMap<ElementId, ViewEntry<C>>>,
    hooks: RefCell<FxHashMap<LifecycleHook, Vec<Rc<dyn Fn()>>>>,
    bus: NotificationSender<C, MemoryElement>,
}

impl<C: Clone + 'static> MemoryEditor<C> {
    pub fn new(bus: NotificationSender<C, MemoryElement>) -> Self {
        Self {
            inner: Rc::new(EditorInner {
                frame: RefCell::new(None),
                selected: RefCell::new(None),
                views: RefCell::new(FxHashMap::default()),
                hooks: RefCell::new(FxHashMap::default()),
                bus,
            }),
        }
    }

    /// An editor together with the receiving end of its bus.
    pub fn with_bus() -> (Self, NotificationReceiver<C, MemoryElement>) {
        let (tx, rx) = notification_bus();
        (Self::new(tx), rx)
    }

    pub fn set_frame(&self, document: Option<MemoryDocument>) {
        *self.inner.frame.borrow_mut() = document;
    }

    /// Replaces the render surface and fires `Loaded`.
    pub fn load(&self, document: MemoryDocument) {
        self.set_frame(Some(document));
        self.emit(LifecycleHook::Loaded);
    }

    pub fn destroy(&self) {
        self.emit(LifecycleHook::Destroyed);
    }

    pub fn select(&self, component: Option<C>) {
        *self.inner.selected.borrow_mut() = component;
    }

    pub fn register_view(&self, element: &MemoryElement, component: C) {
        self.inner
            .views
            .borrow_mut()
            .insert(element.id(), ViewEntry::Owned(component));
    }

    /// Makes lookups for `element` fail with `ResolveError::Lookup`.
    pub fn break_view(&self, element: &MemoryElement, reason: impl Into<String>) {
        self.inner
            .views
            .borrow_mut()
            .insert(element.id(), ViewEntry::Broken(reason.into()));
    }

    pub fn hook_count(&self, hook: LifecycleHook) -> usize {
        self.inner.hooks.borrow().get(&hook).map_or(0, Vec::len)
    }

    /// Runs every callback subscribed to `hook`, in subscription order.
    pub fn emit(&self, hook: LifecycleHook) {
        let callbacks = self
            .inner
            .hooks
            .borrow()
            .get(&hook)
            .cloned()
            .unwrap_or_default();
        tracing::trace!(hook = hook.as_str(), callbacks = callbacks.len(), "lifecycle");
        for callback in callbacks {
            callback();
        }
    }
}

impl<C: Clone + 'static> EditorHost for MemoryEditor<C> {
    type Component = C;
    type Element = MemoryElement;
    type Document = MemoryDocument;

    fn selected(&self) -> Option<C> {
        self.inner.selected.borrow().clone()
    }

    fn resolve_view_owner(&self, element: &MemoryElement) -> Result<Option<C>, ResolveError> {
        match self.inner.views.borrow().get(&element.id()) {
            Some(ViewEntry::Owned(component)) => Ok(Some(component.clone())),
            Some(ViewEntry::Broken(reason)) => Err(ResolveError::Lookup(reason.clone())),
            None => Ok(None),
        }
    }

    fn frame_document(&self) -> Option<MemoryDocument> {
        self.inner.frame.borrow().clone()
    }

    fn trigger(&self, kind: NotificationKind, payload: TextChange<C, MemoryElement>) {
        let _ = self.inner.bus.send_change(kind, payload);
    }

    fn on(&self, hook: LifecycleHook, callback: LifecycleCallback) {
        self.inner
            .hooks
            .borrow_mut()
            .entry(hook)
            .or_default()
            .push(Rc::from(callback));
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/editor.rs"]
mod tests;
