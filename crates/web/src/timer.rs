//! `setTimeout` as the debounce scheduler.

use crate::log::warn;
use vista_reactive::{Scheduler, Task};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Scheduler backed by the global `setTimeout`.
///
/// Works in windows and workers alike. Without a `setTimeout` tasks run
/// synchronously.
pub struct TimeoutScheduler {
    global: js_sys::Object,
    set_timeout: Option<js_sys::Function>,
}

impl TimeoutScheduler {
    pub fn new() -> Self {
        let global = js_sys::global();
        let set_timeout = js_sys::Reflect::get(&global, &JsValue::from_str("setTimeout"))
            .ok()
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok());
        Self { global, set_timeout }
    }
}

impl Default for TimeoutScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        let Some(set_timeout) = self.set_timeout.as_ref() else {
            warn("[vista] setTimeout unavailable; running task immediately");
            task();
            return;
        };

        let callback = Closure::once_into_js(move || task());
        if let Err(err) = set_timeout.call2(&self.global, &callback, &JsValue::from(delay_ms)) {
            warn(&alloc::format!("[vista] setTimeout failed: {:?}", err));
        }
    }
}
