use std::sync::{Arc, Mutex};

use super::*;

#[derive(Clone, Default)]
struct Sink(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for Sink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn filtered_output(debug: bool) -> String {
    let sink = Sink::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(default_filter(debug)))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        tracing::debug!(target: TRACE_TARGET, "bind frame");
        tracing::debug!(target: "textchange::demo", "demo detail");
        tracing::info!(target: "textchange::demo", "starting demo");
    });
    let bytes = sink.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn default_filter_is_info_only() {
    assert_eq!(default_filter(false), "textchange=info");
}

#[test]
fn debug_setting_raises_notifier_target() {
    assert_eq!(
        default_filter(true),
        "textchange=info,textchange.notifier=debug"
    );
}

#[test]
fn notifier_traces_pass_the_filter_only_with_debug() {
    let quiet = filtered_output(false);
    assert!(quiet.contains("starting demo"), "{quiet}");
    assert!(!quiet.contains("bind frame"), "{quiet}");

    let verbose = filtered_output(true);
    assert!(verbose.contains("bind frame"), "{verbose}");
    assert!(verbose.contains("starting demo"), "{verbose}");
    assert!(!verbose.contains("demo detail"), "{verbose}");
}
