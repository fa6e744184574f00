//! Browser `beforeprint`/`afterprint` events feeding the print hook.

use alloc::boxed::Box;
use alloc::rc::Rc;
use vista_reactive::PrintHook;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

const BEFORE_PRINT: &str = "beforeprint";
const AFTER_PRINT: &str = "afterprint";

/// Window print listeners; removed on drop.
pub struct PrintEventBridge {
    target: EventTarget,
    before: Closure<dyn FnMut(Event)>,
    after: Closure<dyn FnMut(Event)>,
}

impl PrintEventBridge {
    /// Listens to the window's print events. Returns `None` without a window.
    ///
    /// Only a weak reference to `hook` is kept.
    pub fn attach(hook: &Rc<PrintHook>) -> Option<Self> {
        let target: EventTarget = web_sys::window()?.into();

        let weak = Rc::downgrade(hook);
        let before = Closure::wrap(Box::new(move |_: Event| {
            if let Some(hook) = weak.upgrade() {
                hook.before_print();
            }
        }) as Box<dyn FnMut(Event)>);

        let weak = Rc::downgrade(hook);
        let after = Closure::wrap(Box::new(move |_: Event| {
            if let Some(hook) = weak.upgrade() {
                hook.after_print();
            }
        }) as Box<dyn FnMut(Event)>);

        let bridge = Self { target, before, after };
        bridge
            .target
            .add_event_listener_with_callback(BEFORE_PRINT, bridge.before.as_ref().unchecked_ref())
            .ok()?;
        bridge
            .target
            .add_event_listener_with_callback(AFTER_PRINT, bridge.after.as_ref().unchecked_ref())
            .ok()?;
        Some(bridge)
    }
}

impl Drop for PrintEventBridge {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(BEFORE_PRINT, self.before.as_ref().unchecked_ref());
        let _ = self
            .target
            .remove_event_listener_with_callback(AFTER_PRINT, self.after.as_ref().unchecked_ref());
    }
}
