use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use textchange::kernel::notifier::TRACE_TARGET;

const BASE_FILTER: &str = "textchange=info";

pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: Option<PathBuf>,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

/// Filter directives used when `RUST_LOG` is unset. With `debug` on, the
/// notifier's trace target is raised to `debug` so its traces reach the sink.
pub fn default_filter(debug: bool) -> String {
    if debug {
        format!("{BASE_FILTER},{TRACE_TARGET}=debug")
    } else {
        BASE_FILTER.to_string()
    }
}

/// Installs the global subscriber. Logs go to a daily file under `log_dir`
/// when given, otherwise to stderr. Returns `None` if a subscriber is
/// already set or the log directory cannot be created.
pub fn init(log_dir: Option<&Path>, debug: bool) -> Option<LoggingGuard> {
    let (writer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).ok()?;
            let file_appender = tracing_appender::rolling::daily(dir, "textchange.log");
            tracing_appender::non_blocking(file_appender)
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    let debug_enabled = debug;
    tracing::info!(log_dir = ?log_dir, debug = debug_enabled, "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir: log_dir.map(Path::to_path_buf),
    })
}

#[cfg(test)]
#[path = "../tests/unit/logging.rs"]
mod tests;
