//! Conversions between Rust values and JavaScript values.

use alloc::string::ToString;
use serde::Serialize;
use vista_core::{Breakpoint, Error, MediaChange};
use wasm_bindgen::JsValue;

/// Converts a configuration error into a JavaScript error string.
pub fn error_to_js(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible()).map_err(Into::into)
}

/// Converts activations to an array of `{ matches, mediaQuery, mqAlias, suffix, priority }`.
pub fn changes_to_js(changes: &[MediaChange]) -> Result<JsValue, JsValue> {
    to_js(changes)
}

/// Converts breakpoints to an array of `{ alias, mediaQuery, suffix, priority, overlapping }`.
pub fn breakpoints_to_js(breakpoints: &[Breakpoint]) -> Result<JsValue, JsValue> {
    to_js(breakpoints)
}
