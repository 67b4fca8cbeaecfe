//! Demo: installs the change notifier on an in-memory editor, replays a short
//! editing session and prints every `text:input` / `text:commit`.
//!
//! Usage: textchange [--settings <file>] [--log-dir <dir>]

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use textchange::core::event::RawEvent;
use textchange::kernel::services::adapters::{
    default_settings_path, load_settings, MemoryDocument, MemoryEditor, MemoryElement,
};
use textchange::kernel::services::ports::{Settings, SettingsError};
use textchange::kernel::services::NotificationReceiver;
use textchange::ChangeNotifier;

mod logging;

const KEYSTROKE_GAP: Duration = Duration::from_millis(60);

struct Args {
    settings: Option<PathBuf>,
    log_dir: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        settings: None,
        log_dir: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--settings" => {
                args.settings = Some(it.next().ok_or("--settings needs a path")?.into());
            }
            "--log-dir" => {
                args.log_dir = Some(it.next().ok_or("--log-dir needs a path")?.into());
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn resolve_settings(explicit: Option<PathBuf>) -> Result<Settings, SettingsError> {
    if let Some(path) = explicit {
        return load_settings(&path);
    }
    match default_settings_path().filter(|p| p.exists()) {
        Some(path) => load_settings(&path),
        None => Ok(Settings::default()),
    }
}

fn flush(rx: &mut NotificationReceiver<&'static str, MemoryElement>) {
    for notification in rx.drain() {
        println!(
            "{:<12} [{}] {:?}",
            notification.name(),
            notification.payload.component,
            notification.payload.text
        );
    }
}

fn type_word(doc: &MemoryDocument, el: &MemoryElement, word: &str) {
    for ch in word.chars() {
        el.push_str(ch.encode_utf8(&mut [0; 4]));
        doc.dispatch(&RawEvent::input(el.clone()).with_data(ch.to_string()));
        thread::sleep(KEYSTROKE_GAP);
    }
}

fn main() -> std::process::ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: textchange [--settings <file>] [--log-dir <dir>]");
            return std::process::ExitCode::from(2);
        }
    };

    // Settings come first: `debug` decides the notifier's log level.
    let settings = match resolve_settings(args.settings) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("failed to load settings: {err}");
            return std::process::ExitCode::FAILURE;
        }
    };

    let logging = logging::init(args.log_dir.as_deref(), settings.notifier.debug);
    if let Some(dir) = logging.as_ref().and_then(|guard| guard.log_dir()) {
        eprintln!("logging to {}", dir.display());
    }
    tracing::info!(
        throttle_ms = settings.notifier.throttle_ms,
        debug = settings.notifier.debug,
        "starting demo"
    );

    let (editor, mut rx) = MemoryEditor::<&'static str>::with_bus();
    let notifier = ChangeNotifier::install(editor.clone(), settings.notifier);

    let doc = MemoryDocument::new();
    let title = MemoryElement::editable("");
    let body = MemoryElement::editable("");
    editor.register_view(&title, "title");
    editor.register_view(&body, "body");
    editor.load(doc.clone());

    type_word(&doc, &title, "Hello");
    doc.dispatch(&RawEvent::blur(title.clone()));
    flush(&mut rx);

    doc.dispatch(&RawEvent::composition_start(body.clone()));
    for step in ["に", "にほ", "にほんご"] {
        body.set_text(step);
        doc.dispatch(&RawEvent::input(body.clone()));
        thread::sleep(KEYSTROKE_GAP);
    }
    body.set_text("日本語");
    doc.dispatch(&RawEvent::composition_end(body.clone()).with_data("日本語"));
    doc.dispatch(&RawEvent::blur(body.clone()));
    flush(&mut rx);

    // Reset the render surface: the old document goes quiet.
    let fresh = MemoryDocument::new();
    editor.load(fresh.clone());
    title.set_text("stale");
    doc.dispatch(&RawEvent::blur(title.clone()));
    title.set_text("Hello again");
    fresh.dispatch(&RawEvent::blur(title.clone()));
    flush(&mut rx);

    editor.destroy();
    fresh.dispatch(&RawEvent::blur(title.clone()));
    flush(&mut rx);

    tracing::info!(destroyed = notifier.is_destroyed(), "demo finished");
    std::process::ExitCode::SUCCESS
}
