#![allow(dead_code)]

use kbhelper_core::{Callback, KeyCode, KeyEvent, ModifierSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Shared log that callbacks append labels to, so tests can check order
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Callback that appends `label` to `log` each time it runs
pub fn logging_callback(log: &CallLog, label: &str) -> Callback {
    let log = log.clone();
    let label = label.to_string();
    Callback::new(move |_| log.lock().unwrap().push(label.clone()))
}

/// Returns the call count and a callback that increments it
pub fn counting_callback() -> (Arc<AtomicUsize>, Callback) {
    let count = Arc::new(AtomicUsize::new(0));
    let c = count.clone();
    (
        count,
        Callback::new(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        }),
    )
}

pub fn calls(count: &AtomicUsize) -> usize {
    count.load(Ordering::SeqCst)
}

/// Key-down event for `code` with the given modifiers
pub fn key_down(code: KeyCode, modifiers: ModifierSet) -> KeyEvent {
    KeyEvent::new(code.raw(), modifiers)
}

/// Every modifier tag, in the order they are declared
pub const ALL_TAGS: [&str; 6] = [
    "<Command>",
    "<Control>",
    "<NumLock>",
    "<Shift>",
    "<CapsLock>",
    "<Option>",
];
