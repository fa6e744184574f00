//! JavaScript facade over the breakpoint observer.

use crate::config::WebConfig;
use crate::convert::{breakpoints_to_js, changes_to_js, error_to_js};
use crate::print_bridge::PrintEventBridge;
use crate::provider::WebMediaQueryProvider;
use crate::timer::TimeoutScheduler;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;
use vista_core::BreakpointLookup;
use vista_reactive::MediaLayer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Observes breakpoint activations in the browser.
///
/// ```javascript
/// const observer = new JsMediaObserver({ filterOverlaps: true });
/// const unsubscribe = observer.subscribe(changes => {
///   console.log(changes[0].mqAlias);
/// });
/// observer.isActive('gt-sm');
/// unsubscribe();
/// observer.dispose();
/// ```
#[wasm_bindgen]
pub struct JsMediaObserver {
    layer: MediaLayer,
    print_bridge: Option<PrintEventBridge>,
    disposed: bool,
}

#[wasm_bindgen]
impl JsMediaObserver {
    /// Creates an observer from an optional configuration object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsMediaObserver, JsValue> {
        let (layout, observer_config) = WebConfig::from_js(&config).map_err(error_to_js)?.into_parts();
        let layer = MediaLayer::new(
            Rc::new(WebMediaQueryProvider::new()),
            Rc::new(TimeoutScheduler::new()),
            &layout,
            observer_config,
        )
        .map_err(error_to_js)?;
        let print_bridge = PrintEventBridge::attach(&layer.hook);

        debug_log!("[vista] observer created with {} breakpoints", layer.registry.len());
        Ok(Self {
            layer,
            print_bridge,
            disposed: false,
        })
    }

    /// Subscribes to activation lists.
    ///
    /// The callback receives an array of media changes, highest priority
    /// first. Returns an unsubscribe function. Fails once disposed.
    pub fn subscribe(&self, callback: js_sys::Function) -> Result<js_sys::Function, JsValue> {
        if self.disposed {
            return Err(JsValue::from_str("JsMediaObserver is disposed"));
        }

        let sub_id = self.layer.observer.subscribe(move |changes| {
            if let Ok(array) = changes_to_js(changes) {
                callback.call1(&JsValue::NULL, &array).ok();
            }
        });

        // Create unsubscribe function
        let observer = self.layer.observer.clone();
        let called = Rc::new(Cell::new(false));
        let unsubscribe = Closure::wrap(Box::new(move || {
            if !called.replace(true) {
                observer.unsubscribe(sub_id);
            }
        }) as Box<dyn FnMut()>);
        let js_fn: js_sys::Function = unsubscribe.as_ref().unchecked_ref::<js_sys::Function>().clone();
        unsubscribe.forget();
        Ok(js_fn)
    }

    /// Returns true if the alias or query currently matches.
    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self, value: &str) -> bool {
        self.layer.observer.is_active(value)
    }

    /// Returns true if any of the aliases or queries currently matches.
    #[wasm_bindgen(js_name = isActiveAny)]
    pub fn is_active_any(&self, values: Vec<String>) -> bool {
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        self.layer.observer.is_active_any(&refs)
    }

    /// Returns the current activation list.
    pub fn activations(&self) -> Result<JsValue, JsValue> {
        changes_to_js(&self.layer.observer.activations())
    }

    /// Returns the registered breakpoints.
    pub fn breakpoints(&self) -> Result<JsValue, JsValue> {
        breakpoints_to_js(self.layer.registry.items())
    }

    #[wasm_bindgen(js_name = subscriptionCount)]
    pub fn subscription_count(&self) -> usize {
        self.layer.observer.subscription_count()
    }

    /// Ends every subscription and detaches all native listeners.
    ///
    /// The print hook loses its media listener too, so later `subscribe`
    /// calls are refused.
    pub fn dispose(&mut self) {
        self.disposed = true;
        let ended = self.layer.observer.unsubscribe_all();
        self.layer.matcher.clear();
        self.print_bridge = None;
        debug_log!("[vista] observer disposed, {} subscription(s) ended", ended);
    }
}
