//! Activation aggregator.
//!
//! `MediaObserver` merges independently firing media query signals into one
//! stream of activation lists. Every subscription runs its own pipeline:
//!
//! ```text
//! raw change -> drop deactivations -> debounce -> recompute all activations
//!            -> substitute print -> merge alias -> sort by priority
//!            -> filter overlaps -> suppress empty -> (suppress duplicate) -> emit
//! ```
//!
//! The recompute step reads the matcher's current state for every watched
//! query instead of patching the previous list, so interleaved match and
//! unmatch callbacks can never leave a stale entry behind.

use crate::matcher::MediaMatcher;
use crate::print_hook::{PrintInterceptor, PrintTransition};
use crate::scheduler::Scheduler;
use crate::subscription::SubscriptionId;
use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use hashbrown::{HashMap, HashSet};
use vista_core::{merge_alias, sort_descending_priority, BreakpointLookup, MediaChange, PRINT_QUERY};

/// Default debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u32 = 10;

/// Observer configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObserverConfig {
    /// Drop activations of overlapping breakpoints from emitted lists.
    pub filter_overlaps: bool,
    /// Quiet period coalescing a burst of native signals.
    pub debounce_ms: u32,
    /// Skip an emission listing the same queries as the previous one.
    pub suppress_duplicates: bool,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            filter_overlaps: false,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            suppress_duplicates: false,
        }
    }
}

/// Per-subscription pipeline state.
struct Pipeline {
    callback: Box<dyn Fn(&[MediaChange])>,
    /// Bumped by every accepted signal; only the latest scheduled flush runs.
    generation: Cell<u64>,
    active: Cell<bool>,
    matcher_sub: Cell<SubscriptionId>,
    print_sub: Cell<SubscriptionId>,
    last: RefCell<Option<Vec<MediaChange>>>,
}

struct ObserverInner {
    registry: Rc<dyn BreakpointLookup>,
    matcher: Rc<dyn MediaMatcher>,
    hook: Rc<dyn PrintInterceptor>,
    scheduler: Rc<dyn Scheduler>,
    config: ObserverConfig,
    pipelines: RefCell<HashMap<SubscriptionId, Rc<Pipeline>>>,
    next_id: Cell<SubscriptionId>,
}

impl Drop for ObserverInner {
    fn drop(&mut self) {
        for (_, pipeline) in self.pipelines.get_mut().drain() {
            pipeline.active.set(false);
            self.matcher.unobserve(pipeline.matcher_sub.get());
            self.hook.unsubscribe_transitions(pipeline.print_sub.get());
        }
    }
}

/// Observes breakpoint activations.
///
/// Cheap to clone; clones share pipelines and configuration.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use vista_core::LayoutConfig;
/// use vista_reactive::{ManualScheduler, MediaLayer, MockMatchMedia, ObserverConfig};
///
/// let native = Rc::new(MockMatchMedia::new());
/// let scheduler = Rc::new(ManualScheduler::new());
/// let layer = MediaLayer::new(
///     native.clone(),
///     scheduler.clone(),
///     &LayoutConfig::default(),
///     ObserverConfig { filter_overlaps: true, ..ObserverConfig::default() },
/// )
/// .unwrap();
///
/// let current = Rc::new(RefCell::new(String::new()));
/// let current_clone = current.clone();
/// layer.observer.subscribe(move |changes| {
///     *current_clone.borrow_mut() = changes[0].mq_alias.clone();
/// });
///
/// native.activate_alias(&*layer.registry, "md", true);
/// scheduler.advance(10);
/// assert_eq!(*current.borrow(), "md");
/// assert!(layer.observer.is_active("gt-sm"));
/// ```
#[derive(Clone)]
pub struct MediaObserver {
    inner: Rc<ObserverInner>,
}

impl MediaObserver {
    /// Creates an observer over explicitly supplied collaborators.
    pub fn new(
        registry: Rc<dyn BreakpointLookup>,
        matcher: Rc<dyn MediaMatcher>,
        hook: Rc<dyn PrintInterceptor>,
        scheduler: Rc<dyn Scheduler>,
        config: ObserverConfig,
    ) -> Self {
        Self {
            inner: Rc::new(ObserverInner {
                registry,
                matcher,
                hook,
                scheduler,
                config,
                pipelines: RefCell::new(HashMap::new()),
                next_id: Cell::new(1),
            }),
        }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> ObserverConfig {
        self.inner.config
    }

    /// Subscribes to activation lists.
    ///
    /// Each subscription starts its own pipeline. Queries already matching
    /// are replayed into it, so the first list arrives one debounce window
    /// after subscribing. Lists are sorted by descending priority; index 0
    /// is the current breakpoint when overlaps are filtered.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&[MediaChange]) + 'static,
    {
        let inner = &self.inner;
        let id = inner.next_id.get();
        inner.next_id.set(id + 1);

        let pipeline = Rc::new(Pipeline {
            callback: Box::new(callback),
            generation: Cell::new(0),
            active: Cell::new(true),
            matcher_sub: Cell::new(0),
            print_sub: Cell::new(0),
            last: RefCell::new(None),
        });
        inner.pipelines.borrow_mut().insert(id, pipeline.clone());

        let weak_inner = Rc::downgrade(inner);
        let weak_pipeline = Rc::downgrade(&pipeline);
        let print_sub = inner.hook.subscribe_transitions(Rc::new(move |_: &PrintTransition| {
            schedule_flush(&weak_inner, &weak_pipeline);
        }));
        pipeline.print_sub.set(print_sub);

        let queries = inner.hook.with_print_query(&inner.registry.queries());

        let weak_inner = Rc::downgrade(inner);
        let weak_pipeline = Rc::downgrade(&pipeline);
        let matcher_sub = inner.matcher.observe(
            &queries,
            Rc::new(move |change: &MediaChange| {
                if change.matches {
                    schedule_flush(&weak_inner, &weak_pipeline);
                }
            }),
        );
        pipeline.matcher_sub.set(matcher_sub);

        debug_log!("[vista] subscription {} watching {} queries", id, queries.len());
        id
    }

    /// Ends a subscription.
    ///
    /// A debounced emission still pending for it never fires. Returns true
    /// if the subscription existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.inner.pipelines.borrow_mut().remove(&id);
        match removed {
            Some(pipeline) => {
                pipeline.active.set(false);
                self.inner.matcher.unobserve(pipeline.matcher_sub.get());
                self.inner.hook.unsubscribe_transitions(pipeline.print_sub.get());
                true
            }
            None => false,
        }
    }

    /// Ends every subscription. Returns how many were live.
    pub fn unsubscribe_all(&self) -> usize {
        let ids: Vec<SubscriptionId> = self.inner.pipelines.borrow().keys().copied().collect();
        ids.into_iter().filter(|&id| self.unsubscribe(id)).count()
    }

    /// Returns the number of live subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.inner.pipelines.borrow().len()
    }

    /// Returns true if the alias, or else the literal query, matches now.
    ///
    /// Reads the matcher directly; independent of any emission.
    pub fn is_active(&self, alias_or_query: &str) -> bool {
        let query = match self.inner.registry.find_by_alias(alias_or_query) {
            Some(bp) => bp.media_query.as_str(),
            None => alias_or_query,
        };
        self.inner.matcher.is_active(query)
    }

    /// Returns true if any of the values is active.
    ///
    /// Each value may hold several comma-separated aliases or queries.
    pub fn is_active_any(&self, values: &[&str]) -> bool {
        values
            .iter()
            .flat_map(|value| value.split(','))
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .any(|value| self.is_active(value))
    }

    /// Computes the current activation list synchronously.
    ///
    /// Same recompute as an emission, without debounce, duplicate
    /// suppression or empty suppression.
    pub fn activations(&self) -> Vec<MediaChange> {
        self.inner.find_all_activations()
    }
}

impl ObserverInner {
    fn find_all_activations(&self) -> Vec<MediaChange> {
        let mut raw: Vec<MediaChange> = self
            .matcher
            .activations()
            .into_iter()
            .map(MediaChange::activation)
            .collect();

        // Entered through beforeprint: the print query itself need not match
        if self.hook.is_printing() && !raw.iter().any(|change| self.hook.is_print_event(change)) {
            raw.push(MediaChange::activation(PRINT_QUERY));
        }

        let mut changes: Vec<MediaChange> = raw
            .into_iter()
            .map(|change| {
                if self.hook.is_print_event(&change) {
                    self.hook.update_event(change)
                } else {
                    change
                }
            })
            .map(|change| {
                let bp = self.registry.find_by_query(&change.media_query);
                merge_alias(change, bp)
            })
            .collect();

        // A print substitute may already be active on screen
        let mut seen: HashSet<String> = HashSet::new();
        changes.retain(|change| seen.insert(change.media_query.clone()));

        sort_descending_priority(&mut changes);

        if self.config.filter_overlaps {
            changes.retain(|change| {
                self.registry
                    .find_by_query(&change.media_query)
                    .map_or(true, |bp| !bp.overlapping)
            });
        }

        changes
    }

    fn flush(&self, pipeline: &Pipeline) {
        let changes = self.find_all_activations();

        if !changes.iter().any(|change| !change.media_query.is_empty()) {
            return;
        }

        if self.config.suppress_duplicates {
            let mut last = pipeline.last.borrow_mut();
            if last.as_deref().map_or(false, |previous| same_queries(previous, &changes)) {
                return;
            }
            *last = Some(changes.clone());
        }

        debug_log!("[vista] emitting {} activation(s)", changes.len());
        (pipeline.callback)(&changes);
    }
}

/// Starts or restarts the debounce window of a pipeline.
fn schedule_flush(inner: &Weak<ObserverInner>, pipeline: &Weak<Pipeline>) {
    let (Some(strong_inner), Some(strong_pipeline)) = (inner.upgrade(), pipeline.upgrade()) else {
        return;
    };
    if !strong_pipeline.active.get() {
        return;
    }

    let generation = strong_pipeline.generation.get() + 1;
    strong_pipeline.generation.set(generation);

    let inner = inner.clone();
    let pipeline = pipeline.clone();
    strong_inner.scheduler.schedule(
        strong_inner.config.debounce_ms,
        Box::new(move || {
            let (Some(inner), Some(pipeline)) = (inner.upgrade(), pipeline.upgrade()) else {
                return;
            };
            if pipeline.active.get() && pipeline.generation.get() == generation {
                inner.flush(&pipeline);
            }
        }),
    );
}

/// Same length and same set of queries on both sides.
fn same_queries(previous: &[MediaChange], current: &[MediaChange]) -> bool {
    if previous.len() != current.len() {
        return false;
    }
    let queries = |list: &[MediaChange]| -> HashSet<String> {
        list.iter().map(|change| change.media_query.clone()).collect()
    };
    queries(previous) == queries(current)
}
