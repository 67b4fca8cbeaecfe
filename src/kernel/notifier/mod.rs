//! Change notifier: turns raw sub-frame input into `text:input` and
//! `text:commit` notifications on the host bus.
//!
//! - `binder`: which frame document currently carries our listeners.
//! - `composition`: IME guard.
//! - `throttle`: leading-edge limiter for live input.
//! - `resolve`: element -> component, payload assembly.

pub mod binder;
pub mod composition;
pub mod resolve;
pub mod throttle;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::core::event::{LifecycleHook, NotificationKind, RawEvent, RawEventKind};
use crate::core::id::DocumentId;
use crate::kernel::services::adapters::SystemClock;
use crate::kernel::services::ports::{Clock, EditorHost, FrameDocument, Listener, NotifierConfig};

pub use binder::{BindOutcome, FrameBinder};
pub use composition::{CompositionGuard, CompositionState};
pub use throttle::ThrottleGate;

/// `tracing` target for the notifier's debug traces.
pub const TRACE_TARGET: &str = "textchange.notifier";

struct BindingState<D: FrameDocument> {
    binder: FrameBinder<D>,
    composition: CompositionGuard,
    throttle: ThrottleGate,
    destroyed: bool,
}

struct Inner<H: EditorHost> {
    host: H,
    config: NotifierConfig,
    clock: Rc<dyn Clock>,
    state: RefCell<BindingState<H::Document>>,
}

impl<H: EditorHost> Drop for Inner<H> {
    fn drop(&mut self) {
        self.state.get_mut().binder.unbind();
    }
}

/// Handle to one notifier instance. Clones share state.
///
/// All state is per instance; several editors can each carry their own.
pub struct ChangeNotifier<H: EditorHost> {
    inner: Rc<Inner<H>>,
}

impl<H: EditorHost> Clone for ChangeNotifier<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<H: EditorHost> ChangeNotifier<H> {
    pub fn new(host: H, config: NotifierConfig) -> Self {
        Self::with_clock(host, config, Rc::new(SystemClock))
    }

    pub fn with_clock(host: H, config: NotifierConfig, clock: Rc<dyn Clock>) -> Self {
        let state = BindingState {
            binder: FrameBinder::new(),
            composition: CompositionGuard::new(),
            throttle: ThrottleGate::new(config.throttle_interval()),
            destroyed: false,
        };
        Self {
            inner: Rc::new(Inner {
                host,
                config,
                clock,
                state: RefCell::new(state),
            }),
        }
    }

    /// Creates a notifier and subscribes it to the host's lifecycle hooks.
    pub fn install(host: H, config: NotifierConfig) -> Self {
        let notifier = Self::new(host, config);
        notifier.subscribe_lifecycle();
        notifier
    }

    /// Subscribes `on_loaded` / `on_destroyed` to the host's hooks.
    ///
    /// The host only keeps weak references; dropping every handle turns the
    /// callbacks into no-ops.
    pub fn subscribe_lifecycle(&self) {
        let weak = self.downgrade();
        self.inner.host.on(
            LifecycleHook::Loaded,
            Box::new(move || {
                if let Some(notifier) = Self::upgrade(&weak) {
                    notifier.on_loaded();
                }
            }),
        );

        let weak = self.downgrade();
        self.inner.host.on(
            LifecycleHook::Destroyed,
            Box::new(move || {
                if let Some(notifier) = Self::upgrade(&weak) {
                    notifier.on_destroyed();
                }
            }),
        );
    }

    pub fn host(&self) -> &H {
        &self.inner.host
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.inner.config
    }

    pub fn is_bound(&self) -> bool {
        self.inner.state.borrow().binder.is_bound()
    }

    pub fn bound_document(&self) -> Option<DocumentId> {
        self.inner.state.borrow().binder.bound_document()
    }

    pub fn is_composing(&self) -> bool {
        self.inner.state.borrow().composition.is_composing()
    }

    pub fn is_destroyed(&self) -> bool {
        self.inner.state.borrow().destroyed
    }

    // --- frame binding ---

    /// Instruments `document`. No-op for the bound document or after destroy.
    pub fn bind_frame(&self, document: H::Document) {
        let weak = self.downgrade();
        let id = document.id();
        let mut state = self.inner.state.borrow_mut();
        if state.destroyed {
            return;
        }

        let outcome = state
            .binder
            .bind(document, |_| Self::listener(weak.clone()));
        drop(state);

        if !self.inner.config.debug {
            return;
        }
        match outcome {
            BindOutcome::AlreadyBound => {
                tracing::debug!(target: TRACE_TARGET, document = %id, "frame already bound");
            }
            BindOutcome::Bound { replaced } => {
                if let Some(previous) = replaced {
                    tracing::debug!(target: TRACE_TARGET, document = %previous, "unbind frame");
                }
                tracing::debug!(target: TRACE_TARGET, document = %id, "bind frame");
            }
        }
    }

    /// Removes all listeners from the bound document, if any.
    pub fn unbind_frame(&self) {
        let unbound = self.inner.state.borrow_mut().binder.unbind();
        if let Some(id) = unbound {
            if self.inner.config.debug {
                tracing::debug!(target: TRACE_TARGET, document = %id, "unbind frame");
            }
        }
    }

    // --- lifecycle ---

    /// Binds the host's current frame document.
    pub fn on_loaded(&self) {
        if self.is_destroyed() {
            return;
        }
        let Some(document) = self.inner.host.frame_document() else {
            if self.inner.config.debug {
                tracing::debug!(target: TRACE_TARGET, "canvas frame load without document");
            }
            return;
        };
        if self.inner.config.debug {
            tracing::debug!(target: TRACE_TARGET, document = %document.id(), "canvas frame load");
        }
        self.bind_frame(document);
    }

    /// Permanent teardown.
    pub fn on_destroyed(&self) {
        let first = !std::mem::replace(&mut self.inner.state.borrow_mut().destroyed, true);
        self.unbind_frame();
        if first && self.inner.config.debug {
            tracing::debug!(target: TRACE_TARGET, "destroy");
        }
    }

    // --- raw handlers ---

    /// Routes a raw event to its handler.
    pub fn handle_event(&self, event: &RawEvent<H::Element>) {
        match event.kind {
            RawEventKind::CompositionStart => self.on_composition_start(event),
            RawEventKind::CompositionEnd => self.on_composition_end(event),
            RawEventKind::Input => self.on_input(event),
            RawEventKind::Blur => self.on_blur(event),
        }
    }

    fn on_composition_start(&self, event: &RawEvent<H::Element>) {
        if self.is_destroyed() || resolve::editable_target(event).is_none() {
            return;
        }
        self.inner.state.borrow_mut().composition.start();
    }

    fn on_composition_end(&self, event: &RawEvent<H::Element>) {
        if self.is_destroyed() || resolve::editable_target(event).is_none() {
            return;
        }
        let previous = self.inner.state.borrow_mut().composition.end();
        if self.inner.config.debug && previous == CompositionState::Idle {
            tracing::debug!(target: TRACE_TARGET, "composition end without start");
        }

        let Some(payload) = resolve::assemble(&self.inner.host, event) else {
            return;
        };
        let now = self.inner.clock.now();
        self.inner.state.borrow_mut().throttle.force(now);
        self.inner.host.trigger(NotificationKind::Input, payload);
    }

    fn on_input(&self, event: &RawEvent<H::Element>) {
        {
            let state = self.inner.state.borrow();
            if state.destroyed || !state.composition.admits_input() {
                return;
            }
        }
        let Some(payload) = resolve::assemble(&self.inner.host, event) else {
            return;
        };
        let now = self.inner.clock.now();
        if self.inner.state.borrow_mut().throttle.try_emit(now) {
            self.inner.host.trigger(NotificationKind::Input, payload);
        }
    }

    fn on_blur(&self, event: &RawEvent<H::Element>) {
        if self.is_destroyed() {
            return;
        }
        let Some(payload) = resolve::assemble(&self.inner.host, event) else {
            return;
        };
        self.inner.host.trigger(NotificationKind::Commit, payload);
    }

    fn listener(weak: Weak<Inner<H>>) -> Listener<H::Element> {
        Rc::new(move |event: &RawEvent<H::Element>| {
            if let Some(notifier) = Self::upgrade(&weak) {
                notifier.handle_event(event);
            }
        })
    }

    fn downgrade(&self) -> Weak<Inner<H>> {
        Rc::downgrade(&self.inner)
    }

    fn upgrade(weak: &Weak<Inner<H>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/notifier/mod.rs"]
mod tests;
