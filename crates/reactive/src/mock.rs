//! In-memory media query primitive.
//!
//! `MockMatchMedia` stands in for `window.matchMedia` wherever no browser is
//! available: unit tests, server-side rendering, native hosts. Queries match
//! only when explicitly activated.

use crate::matcher::{MediaListener, MediaQueryProvider, NativeMediaQuery};
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use vista_core::BreakpointLookup;

struct MockQuery {
    media: String,
    matches: Cell<bool>,
    listeners: RefCell<Vec<(u64, MediaListener)>>,
}

impl MockQuery {
    /// Sets the match state and notifies listeners if it flipped.
    fn set(&self, matches: bool) {
        if self.matches.replace(matches) == matches {
            return;
        }
        let listeners: Vec<MediaListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(matches);
        }
    }
}

/// Native handle returned by `MockMatchMedia::watch`.
pub struct MockMediaQueryList {
    query: Rc<MockQuery>,
    listener_id: u64,
}

impl NativeMediaQuery for MockMediaQueryList {
    fn matches(&self) -> bool {
        self.query.matches.get()
    }

    fn media(&self) -> &str {
        &self.query.media
    }
}

impl Drop for MockMediaQueryList {
    fn drop(&mut self) {
        let id = self.listener_id;
        self.query.listeners.borrow_mut().retain(|(listener_id, _)| *listener_id != id);
    }
}

/// An in-memory `MediaQueryProvider`.
///
/// Activating a query first deactivates every other active query, the way a
/// viewport resize moves from one range to another. Use `activate_many` or
/// `activate_alias(.., true)` when several queries should match together.
#[derive(Default)]
pub struct MockMatchMedia {
    queries: RefCell<Vec<Rc<MockQuery>>>,
    next_listener_id: Cell<u64>,
}

impl MockMatchMedia {
    /// Creates a primitive where nothing matches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `query` the only matching query.
    pub fn activate(&self, query: &str) {
        self.deactivate_all_except(&[query]);
        self.query(query).set(true);
    }

    /// Makes exactly the given queries match, in order.
    pub fn activate_many(&self, queries: &[&str]) {
        self.deactivate_all_except(queries);
        for query in queries {
            self.query(query).set(true);
        }
    }

    /// Activates a breakpoint by alias.
    ///
    /// With `use_overlaps`, the `lt-*`/`gt-*` breakpoints overlapping the
    /// alias' range are activated alongside it. An alias unknown to
    /// `registry` is treated as a literal query.
    pub fn activate_alias(&self, registry: &dyn BreakpointLookup, alias: &str, use_overlaps: bool) {
        let query = registry
            .find_by_alias(alias)
            .map(|bp| bp.media_query.clone())
            .unwrap_or_else(|| String::from(alias));

        let mut list = Vec::new();
        if use_overlaps {
            for overlap in overlaps_of(alias) {
                if let Some(bp) = registry.find_by_alias(overlap) {
                    list.push(bp.media_query.clone());
                }
            }
        }
        list.push(query);

        let refs: Vec<&str> = list.iter().map(String::as_str).collect();
        self.activate_many(&refs);
    }

    /// Stops `query` from matching.
    pub fn deactivate(&self, query: &str) {
        if let Some(found) = self.find(query) {
            found.set(false);
        }
    }

    /// Deactivates every query.
    pub fn reset(&self) {
        self.deactivate_all_except(&[]);
    }

    /// Returns true if `query` currently matches.
    pub fn is_active(&self, query: &str) -> bool {
        self.find(query).map_or(false, |found| found.matches.get())
    }

    /// Returns the number of live listeners on `query`.
    pub fn listener_count(&self, query: &str) -> usize {
        self.find(query).map_or(0, |found| found.listeners.borrow().len())
    }

    fn find(&self, query: &str) -> Option<Rc<MockQuery>> {
        self.queries.borrow().iter().find(|q| q.media == query).cloned()
    }

    fn query(&self, query: &str) -> Rc<MockQuery> {
        if let Some(found) = self.find(query) {
            return found;
        }
        let created = Rc::new(MockQuery {
            media: String::from(query),
            matches: Cell::new(false),
            listeners: RefCell::new(Vec::new()),
        });
        self.queries.borrow_mut().push(created.clone());
        created
    }

    fn deactivate_all_except(&self, keep: &[&str]) {
        let active: Vec<Rc<MockQuery>> = self
            .queries
            .borrow()
            .iter()
            .filter(|q| q.matches.get() && !keep.contains(&q.media.as_str()))
            .cloned()
            .collect();
        for query in active {
            query.set(false);
        }
    }
}

impl MediaQueryProvider for MockMatchMedia {
    fn watch(&self, query: &str, listener: MediaListener) -> Box<dyn NativeMediaQuery> {
        let target = self.query(query);
        let listener_id = self.next_listener_id.get();
        self.next_listener_id.set(listener_id + 1);
        target.listeners.borrow_mut().push((listener_id, listener));
        Box::new(MockMediaQueryList {
            query: target,
            listener_id,
        })
    }
}

/// Default-table breakpoints that overlap an exclusive range.
fn overlaps_of(alias: &str) -> &'static [&'static str] {
    match alias {
        "xs" => &["lt-sm", "lt-md", "lt-lg", "lt-xl"],
        "sm" => &["gt-xs", "lt-md", "lt-lg", "lt-xl"],
        "md" => &["gt-xs", "gt-sm", "lt-lg", "lt-xl"],
        "lg" => &["gt-xs", "gt-sm", "gt-md", "lt-xl"],
        "xl" => &["gt-xs", "gt-sm", "gt-md", "gt-lg"],
        _ => &[],
    }
}
