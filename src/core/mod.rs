//! Shared vocabulary: ids and raw events.

pub mod event;
pub mod id;

pub use event::{LifecycleHook, ListenerOptions, NotificationKind, RawEvent, RawEventKind};
pub use id::{DocumentId, ElementId};
