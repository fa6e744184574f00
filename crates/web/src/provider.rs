//! `window.matchMedia` as a native media query primitive.

use crate::log::warn;
use alloc::boxed::Box;
use alloc::string::String;
use vista_reactive::{MediaListener, MediaQueryProvider, NativeMediaQuery};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent, Window};

const CHANGE_EVENT: &str = "change";

/// Provider backed by the browser's `window.matchMedia`.
///
/// Without a window (workers, server rendering) or when `matchMedia`
/// throws, queries fall back to a static handle that matches only `all`.
pub struct WebMediaQueryProvider {
    window: Option<Window>,
}

impl WebMediaQueryProvider {
    pub fn new() -> Self {
        Self {
            window: web_sys::window(),
        }
    }

    /// Returns true if a window is available.
    pub fn is_supported(&self) -> bool {
        self.window.is_some()
    }
}

impl Default for WebMediaQueryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaQueryProvider for WebMediaQueryProvider {
    fn watch(&self, query: &str, listener: MediaListener) -> Box<dyn NativeMediaQuery> {
        let list = self
            .window
            .as_ref()
            .and_then(|window| window.match_media(query).ok().flatten());

        match list {
            Some(list) => {
                debug_log!("[vista] matchMedia('{}') -> {}", query, list.matches());
                Box::new(WebMediaQuery::attach(list, query, listener))
            }
            None => {
                warn(&alloc::format!("[vista] matchMedia unavailable; '{}' is evaluated statically", query));
                Box::new(StaticMediaQuery::new(query))
            }
        }
    }
}

/// A live `MediaQueryList` with its `change` listener.
struct WebMediaQuery {
    list: MediaQueryList,
    media: String,
    on_change: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl WebMediaQuery {
    fn attach(list: MediaQueryList, query: &str, listener: MediaListener) -> Self {
        let on_change = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            listener(event.matches());
        }) as Box<dyn FnMut(MediaQueryListEvent)>);

        if list
            .add_event_listener_with_callback(CHANGE_EVENT, on_change.as_ref().unchecked_ref())
            .is_err()
        {
            warn(&alloc::format!("[vista] cannot listen to '{}'; changes will be missed", query));
        }

        Self {
            list,
            media: String::from(query),
            on_change,
        }
    }
}

impl NativeMediaQuery for WebMediaQuery {
    fn matches(&self) -> bool {
        self.list.matches()
    }

    fn media(&self) -> &str {
        &self.media
    }
}

impl Drop for WebMediaQuery {
    fn drop(&mut self) {
        let _ = self
            .list
            .remove_event_listener_with_callback(CHANGE_EVENT, self.on_change.as_ref().unchecked_ref());
    }
}

/// A handle that never changes.
pub struct StaticMediaQuery {
    media: String,
    matches: bool,
}

impl StaticMediaQuery {
    pub fn new(query: &str) -> Self {
        let trimmed = query.trim();
        Self {
            media: String::from(query),
            matches: trimmed.is_empty() || trimmed == "all",
        }
    }
}

impl NativeMediaQuery for StaticMediaQuery {
    fn matches(&self) -> bool {
        self.matches
    }

    fn media(&self) -> &str {
        &self.media
    }
}
