//! Services layer (ports + adapters).
//!
//! - `ports`: contracts consumed from the host editor.
//! - `adapters`: in-memory host, clocks and settings IO.
//! - `bus`: channel-backed notification bus.

pub mod adapters;
pub mod bus;
pub mod ports;

pub use bus::{notification_bus, Notification, NotificationReceiver, NotificationSender};
