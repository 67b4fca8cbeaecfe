//! Headless notifier core and the services it talks to.

pub mod notifier;
pub mod services;

pub use notifier::ChangeNotifier;
