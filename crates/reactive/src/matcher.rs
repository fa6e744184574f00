//! Media matcher.
//!
//! `MatchMedia` wraps the host's native media query primitive. It keeps one
//! native handle per distinct query, turns native match flips into raw
//! `MediaChange` events and is the single source of truth for "does this
//! query match right now".

use crate::subscription::{SubscriptionId, SubscriptionManager};
use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use hashbrown::HashMap;
use vista_core::MediaChange;

/// Listener invoked with the new match state on every native flip.
pub type MediaListener = Rc<dyn Fn(bool)>;

/// Callback receiving raw media changes.
pub type MediaCallback = Rc<dyn Fn(&MediaChange)>;

/// A live native media query.
///
/// Dropping the handle detaches the listener it was created with.
pub trait NativeMediaQuery {
    /// Current match state.
    fn matches(&self) -> bool;

    /// The query this handle evaluates.
    fn media(&self) -> &str;
}

/// The host's media query primitive (`window.matchMedia` in browsers).
pub trait MediaQueryProvider {
    /// Evaluates `query` and attaches `listener` to its future flips.
    ///
    /// Implementations must not invoke `listener` synchronously from
    /// within this call.
    fn watch(&self, query: &str, listener: MediaListener) -> Box<dyn NativeMediaQuery>;
}

/// The matcher contract consumed by the observer and the print hook.
pub trait MediaMatcher {
    /// Watches `queries` and delivers raw changes to `callback`.
    ///
    /// Currently matching queries from `queries` are replayed to this
    /// callback immediately as activations; afterwards it receives every
    /// native transition of any watched query.
    fn observe(&self, queries: &[String], callback: MediaCallback) -> SubscriptionId;

    /// Detaches a callback registered with `observe`.
    fn unobserve(&self, id: SubscriptionId) -> bool;

    /// Returns the current match state of `query`, watching it if unseen.
    fn is_active(&self, query: &str) -> bool;

    /// Returns the currently matching queries in registration order.
    fn activations(&self) -> Vec<String>;
}

struct WatchedQuery {
    query: String,
    handle: Box<dyn NativeMediaQuery>,
}

#[derive(Default)]
struct QueryTable {
    /// Watched queries in registration order
    entries: Vec<WatchedQuery>,
    /// Query -> index into `entries`
    index: HashMap<String, usize>,
}

struct MatchMediaInner {
    provider: Rc<dyn MediaQueryProvider>,
    table: RefCell<QueryTable>,
    subscriptions: RefCell<SubscriptionManager<MediaChange>>,
}

/// The media matcher.
///
/// A cheap, cloneable handle; clones share state. Native listeners keep
/// only a weak reference, so dropping the last handle releases every native
/// query.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use vista_reactive::{MatchMedia, MediaMatcher, MockMatchMedia};
///
/// let native = Rc::new(MockMatchMedia::new());
/// let matcher = MatchMedia::new(native.clone());
///
/// native.activate("(min-width: 600px)");
/// assert!(matcher.is_active("(min-width: 600px)"));
/// assert_eq!(matcher.activations(), vec!["(min-width: 600px)".to_string()]);
/// ```
#[derive(Clone)]
pub struct MatchMedia {
    inner: Rc<MatchMediaInner>,
}

impl MatchMedia {
    /// Creates a matcher over the given native primitive.
    pub fn new(provider: Rc<dyn MediaQueryProvider>) -> Self {
        Self {
            inner: Rc::new(MatchMediaInner {
                provider,
                table: RefCell::new(QueryTable::default()),
                subscriptions: RefCell::new(SubscriptionManager::new()),
            }),
        }
    }

    /// Watches each query not yet watched.
    ///
    /// Returns an activation for every query in `queries` that currently
    /// matches, in the given order.
    pub fn register_query(&self, queries: &[String]) -> Vec<MediaChange> {
        let mut matches = Vec::new();

        for query in queries {
            let known = self.inner.table.borrow().index.get(query.as_str()).copied();
            let currently = match known {
                Some(index) => self.inner.table.borrow().entries[index].handle.matches(),
                None => {
                    let handle = self.inner.provider.watch(query, self.listener_for(query));
                    let currently = handle.matches();
                    let mut table = self.inner.table.borrow_mut();
                    let index = table.entries.len();
                    table.entries.push(WatchedQuery {
                        query: query.clone(),
                        handle,
                    });
                    table.index.insert(query.clone(), index);
                    debug_log!("[vista] watching '{}' (matches: {})", query, currently);
                    currently
                }
            };

            if currently {
                matches.push(MediaChange::activation(query.clone()));
            }
        }

        matches
    }

    /// Returns true if `query` is already watched.
    pub fn is_watching(&self, query: &str) -> bool {
        self.inner.table.borrow().index.contains_key(query)
    }

    /// Returns the number of watched queries.
    pub fn watched_count(&self) -> usize {
        self.inner.table.borrow().entries.len()
    }

    /// Returns the number of `observe` callbacks attached.
    pub fn subscription_count(&self) -> usize {
        self.inner.subscriptions.borrow().len()
    }

    /// Detaches every native listener and every subscriber.
    pub fn clear(&self) {
        let entries = core::mem::take(&mut *self.inner.table.borrow_mut());
        // Native handles detach on drop, outside the table borrow.
        drop(entries);
        self.inner.subscriptions.borrow_mut().clear();
    }

    fn listener_for(&self, query: &str) -> MediaListener {
        let weak: Weak<MatchMediaInner> = Rc::downgrade(&self.inner);
        let query = String::from(query);
        Rc::new(move |matches| {
            if let Some(inner) = weak.upgrade() {
                MatchMedia { inner }.dispatch(&MediaChange::new(matches, query.clone()));
            }
        })
    }

    fn dispatch(&self, change: &MediaChange) {
        let subscriptions = self.inner.subscriptions.borrow().snapshot();
        for sub in subscriptions {
            sub.notify(change);
        }
    }
}

impl MediaMatcher for MatchMedia {
    fn observe(&self, queries: &[String], callback: MediaCallback) -> SubscriptionId {
        let forward = callback.clone();
        let id = self
            .inner
            .subscriptions
            .borrow_mut()
            .subscribe(move |change| forward(change));

        for change in self.register_query(queries) {
            callback(&change);
        }

        id
    }

    fn unobserve(&self, id: SubscriptionId) -> bool {
        self.inner.subscriptions.borrow_mut().unsubscribe(id)
    }

    fn is_active(&self, query: &str) -> bool {
        let known = {
            let table = self.inner.table.borrow();
            table
                .index
                .get(query)
                .map(|&index| table.entries[index].handle.matches())
        };
        match known {
            Some(matches) => matches,
            None => !self.register_query(&[String::from(query)]).is_empty(),
        }
    }

    fn activations(&self) -> Vec<String> {
        self.inner
            .table
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.handle.matches())
            .map(|entry| entry.query.clone())
            .collect()
    }
}
