//! Console bindings.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);
}

#[cfg(all(feature = "debug-log", target_arch = "wasm32"))]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
}

#[cfg(feature = "debug-log")]
#[doc(hidden)]
pub fn write(message: &str) {
    #[cfg(target_arch = "wasm32")]
    console_log(message);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Writes a warning to the console.
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    console_warn(message);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "debug-log")]
        {
            $crate::log::write(&alloc::format!($($arg)*));
        }
        #[cfg(not(feature = "debug-log"))]
        {
            if false {
                let _ = alloc::format!($($arg)*);
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;
    use core::fmt;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    struct Counted<'a>(&'a Cell<u32>);

    impl fmt::Display for Counted<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.set(self.0.get() + 1);
            f.write_str("counted")
        }
    }

    #[wasm_bindgen_test]
    fn test_debug_log_formats_only_when_enabled() {
        let formatted = Cell::new(0);
        debug_log!("[vista] {}", Counted(&formatted));
        let expected = if cfg!(feature = "debug-log") { 1 } else { 0 };
        assert_eq!(formatted.get(), expected);
    }

    #[wasm_bindgen_test]
    fn test_warn_is_always_available() {
        super::warn("[vista] warning");
    }
}
