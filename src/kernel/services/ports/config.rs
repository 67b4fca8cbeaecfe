use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_THROTTLE_MS: u64 = 150;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Minimum spacing between two live `text:input` notifications.
    #[serde(
        default = "default_throttle_ms",
        alias = "throttleMs",
        alias = "throttleIntervalMs",
        alias = "throttle"
    )]
    pub throttle_ms: u64,
    /// Trace bind/unbind/destroy through `tracing::debug!`.
    #[serde(default, alias = "debugLogging", alias = "debug_logging")]
    pub debug: bool,
}

fn default_throttle_ms() -> u64 {
    DEFAULT_THROTTLE_MS
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            throttle_ms: DEFAULT_THROTTLE_MS,
            debug: false,
        }
    }
}

impl NotifierConfig {
    pub fn with_throttle_ms(mut self, throttle_ms: u64) -> Self {
        self.throttle_ms = throttle_ms;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn throttle_interval(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
