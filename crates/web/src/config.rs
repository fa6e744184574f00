//! JavaScript configuration object.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::Deserialize;
use vista_core::{CustomBreakpoint, Error, LayoutConfig, Result};
use vista_reactive::{ObserverConfig, DEFAULT_DEBOUNCE_MS};
use wasm_bindgen::JsValue;

/// The options accepted by `new JsMediaObserver(config)`.
///
/// One flat camelCase object carrying both the breakpoint table options and
/// the observer options. Every field is optional.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebConfig {
    pub filter_overlaps: bool,
    pub debounce_ms: u32,
    pub suppress_duplicates: bool,
    pub disable_default_bps: bool,
    pub add_orientation_bps: bool,
    pub print_with_breakpoints: Vec<String>,
    pub breakpoints: Vec<CustomBreakpoint>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            filter_overlaps: false,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            suppress_duplicates: false,
            disable_default_bps: false,
            add_orientation_bps: false,
            print_with_breakpoints: Vec::new(),
            breakpoints: Vec::new(),
        }
    }
}

impl WebConfig {
    /// Parses a JavaScript value; `undefined` and `null` yield the defaults.
    pub fn from_js(value: &JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value.clone()).map_err(|e| Error::invalid_config(e.to_string()))
    }

    /// Splits into the table and observer configurations.
    pub fn into_parts(self) -> (LayoutConfig, ObserverConfig) {
        let layout = LayoutConfig {
            disable_default_bps: self.disable_default_bps,
            add_orientation_bps: self.add_orientation_bps,
            print_with_breakpoints: self.print_with_breakpoints,
            breakpoints: self.breakpoints,
        };
        let observer = ObserverConfig {
            filter_overlaps: self.filter_overlaps,
            debounce_ms: self.debounce_ms,
            suppress_duplicates: self.suppress_duplicates,
        };
        (layout, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn parse(json: &str) -> Result<WebConfig> {
        let value = js_sys::JSON::parse(json).unwrap();
        WebConfig::from_js(&value)
    }

    #[wasm_bindgen_test]
    fn test_undefined_is_default() {
        assert_eq!(WebConfig::from_js(&JsValue::UNDEFINED).unwrap(), WebConfig::default());
        assert_eq!(WebConfig::from_js(&JsValue::NULL).unwrap(), WebConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_partial_object_keeps_defaults() {
        let config = parse(r#"{ "filterOverlaps": true }"#).unwrap();
        assert!(config.filter_overlaps);
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert!(!config.disable_default_bps);
    }

    #[wasm_bindgen_test]
    fn test_full_object() {
        let config = parse(
            r#"{
                "debounceMs": 25,
                "suppressDuplicates": true,
                "addOrientationBps": true,
                "printWithBreakpoints": ["md"],
                "breakpoints": [{ "alias": "tiny", "mediaQuery": "(max-width: 320px)", "priority": 1200 }]
            }"#,
        )
        .unwrap();

        let (layout, observer) = config.into_parts();
        assert_eq!(observer.debounce_ms, 25);
        assert!(observer.suppress_duplicates);
        assert!(layout.add_orientation_bps);
        assert_eq!(layout.print_with_breakpoints, alloc::vec![String::from("md")]);
        assert_eq!(layout.breakpoints[0].alias, "tiny");
        assert_eq!(layout.breakpoints[0].priority, Some(1200));
    }

    #[wasm_bindgen_test]
    fn test_wrong_type_is_invalid_config() {
        let result = parse(r#"{ "debounceMs": "soon" }"#);
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }
}
