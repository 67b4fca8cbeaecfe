//! Service adapters: concrete implementations of the ports.

pub mod clock;
pub mod editor;
pub mod memory;
pub mod settings;

pub use clock::{ManualClock, SystemClock};
pub use editor::MemoryEditor;
pub use memory::{ListenerKey, MemoryDocument, MemoryElement};
pub use settings::{default_settings_path, ensure_settings_file, load_settings, parse_settings};
