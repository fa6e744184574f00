//! Opt-in diagnostics.
//!
//! With the `debug-log` feature on a wasm32 target, `debug_log!` writes to
//! the browser console. Everywhere else the arguments are type-checked and
//! discarded.

#[cfg(all(feature = "debug-log", target_arch = "wasm32"))]
use wasm_bindgen::prelude::*;

#[cfg(all(feature = "debug-log", target_arch = "wasm32"))]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[cfg(all(feature = "debug-log", target_arch = "wasm32"))]
#[doc(hidden)]
pub fn write(message: &str) {
    log(message);
}

macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "debug-log", target_arch = "wasm32"))]
        {
            $crate::log::write(&alloc::format!($($arg)*));
        }
        #[cfg(not(all(feature = "debug-log", target_arch = "wasm32")))]
        {
            if false {
                let _ = alloc::format!($($arg)*);
            }
        }
    }};
}
