//! Browser Logging
//!
//! Routes `tracing` events to the devtools console through the rolling
//! logger, and dumps the buffered lines when the app panics.

use rolling_logger::{LogHandle, RollingLayer, DEFAULT_CAPACITY};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use wasm_bindgen::JsValue;
use web_sys::console;

pub fn init(level: LevelFilter) {
    let layer = RollingLayer::new(DEFAULT_CAPACITY).with_sink(write_console);
    match rolling_logger::init(level, layer) {
        Ok(handle) => install_panic_hook(handle),
        Err(_) => console_error_panic_hook::set_once(),
    }
}

fn write_console(level: &Level, line: &str) {
    let line = JsValue::from_str(line);
    match *level {
        Level::ERROR => console::error_1(&line),
        Level::WARN => console::warn_1(&line),
        Level::INFO => console::info_1(&line),
        _ => console::debug_1(&line),
    }
}

fn install_panic_hook(handle: LogHandle) {
    std::panic::set_hook(Box::new(move |info| {
        let recent = handle.recent();
        if !recent.is_empty() {
            let dump = format!("last {} log lines:\n{}", recent.len(), recent.join("\n"));
            console::error_1(&JsValue::from_str(&dump));
        }
        console_error_panic_hook::hook(info);
    }));
}
