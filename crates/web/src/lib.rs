//! Vista Web - WASM bindings and JavaScript API for Vista.
//!
//! This crate connects the breakpoint observer to the browser:
//!
//! - `WebMediaQueryProvider`: `window.matchMedia` as the native media primitive
//! - `TimeoutScheduler`: `setTimeout` as the debounce timer
//! - `PrintEventBridge`: `beforeprint`/`afterprint` feeding the print hook
//! - `JsMediaObserver`: the JavaScript entry point
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import { JsMediaObserver } from 'vista';
//!
//! const observer = new JsMediaObserver({
//!   filterOverlaps: true,
//!   printWithBreakpoints: ['md'],
//! });
//!
//! const unsubscribe = observer.subscribe(changes => {
//!   document.body.dataset.breakpoint = changes[0].mqAlias;
//! });
//!
//! if (observer.isActiveAny(['xs', 'sm'])) {
//!   collapseSidebar();
//! }
//! ```

extern crate alloc;

#[macro_use]
mod log;

pub mod config;
pub mod convert;
pub mod observer;
pub mod print_bridge;
pub mod provider;
pub mod timer;

pub use config::WebConfig;
pub use log::warn;
pub use observer::JsMediaObserver;
pub use print_bridge::PrintEventBridge;
pub use provider::{StaticMediaQuery, WebMediaQueryProvider};
pub use timer::TimeoutScheduler;
