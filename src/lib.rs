//! textchange - change notifications for editable content rendered inside an
//! editor's sub-frame.
//!
//! Module layout:
//! - core: ids and the raw event model
//! - kernel::notifier: frame binding, composition guard, throttle gate
//! - kernel::services: host ports, in-memory adapters, notification bus

pub mod core;
pub mod kernel;

pub use kernel::notifier::ChangeNotifier;
pub use kernel::services::ports::{EditorHost, NotifierConfig, TextChange};
