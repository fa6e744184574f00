//! Print hook.
//!
//! Printing is detected either through the `print` media query or through
//! the host's `beforeprint`/`afterprint` events. While printing, the `print`
//! activation is replaced by the highest-priority configured print
//! breakpoint so layouts can reuse their breakpoint-specific rules.

use crate::matcher::MediaMatcher;
use crate::subscription::{SubscriptionId, SubscriptionManager};
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use vista_core::{merge_alias, Breakpoint, BreakpointLookup, MediaChange, PRINT_QUERY};

/// A change of print context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrintTransition {
    /// Printing started; carries the breakpoints standing in for `print`,
    /// highest priority first.
    Started(Vec<Breakpoint>),
    /// Printing stopped; screen activations apply again.
    Stopped,
}

/// The print contract consumed by the observer.
pub trait PrintInterceptor {
    /// Extends the watch list with the print detection query.
    fn with_print_query(&self, queries: &[String]) -> Vec<String>;

    /// Returns true if `change` concerns the print context.
    fn is_print_event(&self, change: &MediaChange) -> bool;

    /// Returns the substitute event for a print change.
    fn update_event(&self, change: MediaChange) -> MediaChange;

    /// Returns true while a print context is active.
    fn is_printing(&self) -> bool;

    /// Subscribes to print context transitions.
    fn subscribe_transitions(&self, callback: Rc<dyn Fn(&PrintTransition)>) -> SubscriptionId;

    /// Removes a transition subscription.
    fn unsubscribe_transitions(&self, id: SubscriptionId) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
struct PrintState {
    printing: bool,
    /// Printing was entered through `beforeprint`; only `afterprint` ends it.
    via_print_events: bool,
}

/// Tracks the print context and substitutes print breakpoints.
pub struct PrintHook {
    registry: Rc<dyn BreakpointLookup>,
    print_aliases: Vec<String>,
    state: Cell<PrintState>,
    transitions: RefCell<SubscriptionManager<PrintTransition>>,
}

impl PrintHook {
    /// Creates a hook substituting the breakpoints named by `print_aliases`.
    ///
    /// Aliases missing from the registry are ignored.
    pub fn new(registry: Rc<dyn BreakpointLookup>, print_aliases: Vec<String>) -> Self {
        Self {
            registry,
            print_aliases,
            state: Cell::new(PrintState::default()),
            transitions: RefCell::new(SubscriptionManager::new()),
        }
    }

    /// Watches the `print` query on `matcher` and tracks its transitions.
    pub fn attach(self: &Rc<Self>, matcher: &dyn MediaMatcher) -> SubscriptionId {
        let weak = Rc::downgrade(self);
        matcher.observe(
            &[String::from(PRINT_QUERY)],
            Rc::new(move |change: &MediaChange| {
                if let Some(hook) = weak.upgrade() {
                    if hook.is_print_event(change) {
                        hook.on_media_change(change);
                    }
                }
            }),
        )
    }

    /// The configured print breakpoints, in configuration order.
    pub fn print_breakpoints(&self) -> Vec<Breakpoint> {
        self.print_aliases
            .iter()
            .filter_map(|alias| self.registry.find_by_alias(alias))
            .cloned()
            .collect()
    }

    /// The print breakpoints plus the event's own breakpoint, highest
    /// priority first.
    pub fn event_breakpoints(&self, change: &MediaChange) -> Vec<Breakpoint> {
        let mut list = self.print_breakpoints();
        if let Some(bp) = self.registry.find_by_query(&change.media_query) {
            list.push(bp.clone());
        }
        list.sort_by_key(|bp| core::cmp::Reverse(bp.priority));
        list
    }

    /// Feeds a raw `print` query change.
    pub fn on_media_change(&self, change: &MediaChange) {
        let state = self.state.get();
        if change.matches && !state.printing {
            self.start_printing(self.event_breakpoints(change), false);
        } else if !change.matches && state.printing && !state.via_print_events {
            self.stop_printing();
        }
    }

    /// Handles the host's `beforeprint` event.
    pub fn before_print(&self) {
        if !self.state.get().printing {
            let change = MediaChange::activation(PRINT_QUERY);
            self.start_printing(self.event_breakpoints(&change), true);
        }
    }

    /// Handles the host's `afterprint` event.
    pub fn after_print(&self) {
        let mut state = self.state.get();
        state.via_print_events = false;
        self.state.set(state);
        if state.printing {
            self.stop_printing();
        }
    }

    /// Returns the number of transition subscriptions.
    pub fn transition_subscription_count(&self) -> usize {
        self.transitions.borrow().len()
    }

    fn start_printing(&self, breakpoints: Vec<Breakpoint>, via_print_events: bool) {
        self.state.set(PrintState {
            printing: true,
            via_print_events,
        });
        debug_log!("[vista] print started with {} breakpoint(s)", breakpoints.len());
        self.publish(&PrintTransition::Started(breakpoints));
    }

    fn stop_printing(&self) {
        self.state.set(PrintState::default());
        debug_log!("[vista] print stopped");
        self.publish(&PrintTransition::Stopped);
    }

    fn publish(&self, transition: &PrintTransition) {
        let subscriptions = self.transitions.borrow().snapshot();
        for sub in subscriptions {
            sub.notify(transition);
        }
    }
}

impl PrintInterceptor for PrintHook {
    fn with_print_query(&self, queries: &[String]) -> Vec<String> {
        let mut list = queries.to_vec();
        if !list.iter().any(|query| query == PRINT_QUERY) {
            list.push(String::from(PRINT_QUERY));
        }
        list
    }

    fn is_print_event(&self, change: &MediaChange) -> bool {
        change.media_query.starts_with(PRINT_QUERY)
    }

    fn update_event(&self, mut change: MediaChange) -> MediaChange {
        if self.is_print_event(&change) {
            let substitute = self.event_breakpoints(&change).into_iter().next();
            change.media_query = substitute
                .as_ref()
                .map(|bp| bp.media_query.clone())
                .unwrap_or_default();
            return merge_alias(change, substitute.as_ref());
        }
        let bp = self.registry.find_by_query(&change.media_query);
        merge_alias(change, bp)
    }

    fn is_printing(&self) -> bool {
        self.state.get().printing
    }

    fn subscribe_transitions(&self, callback: Rc<dyn Fn(&PrintTransition)>) -> SubscriptionId {
        self.transitions
            .borrow_mut()
            .subscribe(move |transition| callback(transition))
    }

    fn unsubscribe_transitions(&self, id: SubscriptionId) -> bool {
        self.transitions.borrow_mut().unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchMedia;
    use crate::mock::MockMatchMedia;
    use alloc::vec;
    use vista_core::LayoutConfig;

    fn hook_with(print_aliases: &[&str]) -> Rc<PrintHook> {
        let registry = Rc::new(LayoutConfig::default().build_registry().unwrap());
        Rc::new(PrintHook::new(
            registry,
            print_aliases.iter().map(|a| String::from(*a)).collect(),
        ))
    }

    fn record(hook: &PrintHook) -> Rc<RefCell<Vec<PrintTransition>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        hook.subscribe_transitions(Rc::new(move |t: &PrintTransition| seen_clone.borrow_mut().push(t.clone())));
        seen
    }

    #[test]
    fn test_with_print_query_appends_once() {
        let hook = hook_with(&[]);
        let list = hook.with_print_query(&[String::from("a")]);
        assert_eq!(list, vec![String::from("a"), String::from("print")]);
        assert_eq!(hook.with_print_query(&list), list);
    }

    #[test]
    fn test_is_print_event() {
        let hook = hook_with(&[]);
        assert!(hook.is_print_event(&MediaChange::activation("print")));
        assert!(hook.is_print_event(&MediaChange::activation("print and (orientation: landscape)")));
        assert!(!hook.is_print_event(&MediaChange::activation("screen and (min-width: 600px)")));
    }

    #[test]
    fn test_print_breakpoints_skip_unknown_aliases() {
        let hook = hook_with(&["md", "nope", "xs"]);
        let aliases: Vec<String> = hook.print_breakpoints().into_iter().map(|bp| bp.alias).collect();
        assert_eq!(aliases, vec![String::from("md"), String::from("xs")]);
    }

    #[test]
    fn test_update_event_substitutes_highest_priority() {
        let hook = hook_with(&["md", "xs"]);
        let change = hook.update_event(MediaChange::activation("print"));

        assert!(change.matches);
        assert_eq!(change.mq_alias, "xs");
        assert_eq!(change.priority, 1000);
        assert_eq!(change.media_query, "screen and (min-width: 0px) and (max-width: 599.98px)");
    }

    #[test]
    fn test_update_event_without_print_breakpoints_clears_query() {
        let hook = hook_with(&[]);
        let change = hook.update_event(MediaChange::activation("print"));
        assert!(change.media_query.is_empty());
        assert!(change.mq_alias.is_empty());
    }

    #[test]
    fn test_update_event_non_print_merges_own_breakpoint() {
        let hook = hook_with(&["md"]);
        let change = hook.update_event(MediaChange::activation("screen and (min-width: 1280px)"));
        assert_eq!(change.mq_alias, "gt-md");
    }

    #[test]
    fn test_media_path_start_and_stop() {
        let hook = hook_with(&["lg"]);
        let seen = record(&hook);

        hook.on_media_change(&MediaChange::activation("print"));
        assert!(hook.is_printing());
        hook.on_media_change(&MediaChange::activation("print"));
        hook.on_media_change(&MediaChange::deactivation("print"));
        assert!(!hook.is_printing());

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        match &seen[0] {
            PrintTransition::Started(bps) => assert_eq!(bps[0].alias, "lg"),
            other => panic!("unexpected transition: {:?}", other),
        }
        assert_eq!(seen[1], PrintTransition::Stopped);
    }

    #[test]
    fn test_before_print_wins_until_after_print() {
        let hook = hook_with(&["md"]);
        let seen = record(&hook);

        hook.before_print();
        assert!(hook.is_printing());

        // The media query path cannot end a beforeprint session
        hook.on_media_change(&MediaChange::deactivation("print"));
        assert!(hook.is_printing());

        hook.after_print();
        assert!(!hook.is_printing());
        assert_eq!(seen.borrow().len(), 2);

        // afterprint without printing is a no-op
        hook.after_print();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_attach_follows_print_query() {
        let native = Rc::new(MockMatchMedia::new());
        let matcher = MatchMedia::new(native.clone());
        let hook = hook_with(&["md"]);
        hook.attach(&matcher);

        native.activate("print");
        assert!(hook.is_printing());

        native.activate("screen");
        assert!(!hook.is_printing());
    }

    #[test]
    fn test_attach_ignores_other_queries() {
        let native = Rc::new(MockMatchMedia::new());
        let matcher = MatchMedia::new(native.clone());
        let hook = hook_with(&[]);
        hook.attach(&matcher);
        matcher.register_query(&[String::from("screen")]);

        native.activate("screen");
        assert!(!hook.is_printing());
    }

    #[test]
    fn test_unsubscribe_transitions() {
        let hook = hook_with(&[]);
        let id = hook.subscribe_transitions(Rc::new(|_: &PrintTransition| {}));
        assert_eq!(hook.transition_subscription_count(), 1);
        assert!(hook.unsubscribe_transitions(id));
        assert_eq!(hook.transition_subscription_count(), 0);
    }
}
