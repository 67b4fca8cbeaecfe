//! Service ports: traits + data contracts.

pub mod config;
pub mod frame;
pub mod host;
pub mod runtime;
pub mod settings;

pub use config::{NotifierConfig, DEFAULT_THROTTLE_MS};
pub use frame::{EditableElement, FrameDocument, Listener};
pub use host::{EditorHost, LifecycleCallback, ResolveError, TextChange};
pub use runtime::Clock;
pub use settings::{Settings, SettingsError};
