//! Property-based tests for vista-reactive using proptest.

use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use vista_core::{BreakpointLookup, LayoutConfig, MediaChange};
use vista_reactive::{ManualScheduler, MediaLayer, MockMatchMedia, ObserverConfig};

const ALIASES: [&str; 13] = [
    "xs", "sm", "md", "lg", "xl", "lt-sm", "lt-md", "lt-lg", "lt-xl", "gt-xs", "gt-sm", "gt-md", "gt-lg",
];

struct Stack {
    native: Rc<MockMatchMedia>,
    scheduler: Rc<ManualScheduler>,
    layer: MediaLayer,
    emissions: Rc<RefCell<Vec<Vec<MediaChange>>>>,
}

fn stack(config: ObserverConfig) -> Stack {
    let native = Rc::new(MockMatchMedia::new());
    let scheduler = Rc::new(ManualScheduler::new());
    let layer = MediaLayer::new(native.clone(), scheduler.clone(), &LayoutConfig::default(), config).unwrap();
    let emissions = Rc::new(RefCell::new(Vec::new()));
    let emissions_clone = emissions.clone();
    layer
        .observer
        .subscribe(move |changes| emissions_clone.borrow_mut().push(changes.to_vec()));
    Stack {
        native,
        scheduler,
        layer,
        emissions,
    }
}

fn queries_of(stack: &Stack, picks: &[usize]) -> Vec<String> {
    let mut queries: Vec<String> = picks
        .iter()
        .map(|&i| stack.layer.registry.find_by_alias(ALIASES[i]).unwrap().media_query.clone())
        .collect();
    queries.dedup();
    queries
}

proptest! {
    /// Test that emitted lists are ordered by non-increasing priority.
    #[test]
    fn emission_sorted_by_priority(picks in prop::collection::vec(0usize..13, 1..13)) {
        let s = stack(ObserverConfig::default());
        let queries = queries_of(&s, &picks);
        let refs: Vec<&str> = queries.iter().map(String::as_str).collect();

        s.native.activate_many(&refs);
        s.scheduler.run_until_idle();

        let emissions = s.emissions.borrow();
        prop_assert_eq!(emissions.len(), 1);
        let priorities: Vec<i32> = emissions[0].iter().map(|c| c.priority).collect();
        prop_assert!(priorities.windows(2).all(|w| w[0] >= w[1]));
    }

    /// Test that filtering removes exactly the overlapping activations.
    #[test]
    fn filter_overlaps_removes_overlapping(picks in prop::collection::vec(0usize..13, 1..13)) {
        let s = stack(ObserverConfig { filter_overlaps: true, ..ObserverConfig::default() });
        let queries = queries_of(&s, &picks);
        let refs: Vec<&str> = queries.iter().map(String::as_str).collect();

        s.native.activate_many(&refs);
        s.scheduler.run_until_idle();

        let expected: usize = queries
            .iter()
            .filter(|q| !s.layer.registry.find_by_query(q).unwrap().overlapping)
            .collect::<std::collections::HashSet<_>>()
            .len();
        let emissions = s.emissions.borrow();
        if expected == 0 {
            prop_assert!(emissions.is_empty());
        } else {
            prop_assert_eq!(emissions.len(), 1);
            prop_assert_eq!(emissions[0].len(), expected);
            for change in &emissions[0] {
                let bp = s.layer.registry.find_by_alias(&change.mq_alias).unwrap();
                prop_assert!(!bp.overlapping);
            }
        }
    }

    /// Test that a burst inside one window yields one emission of the final state.
    #[test]
    fn burst_collapses_to_final_state(
        steps in prop::collection::vec((0usize..5, 0u64..10), 1..20)
    ) {
        let s = stack(ObserverConfig { filter_overlaps: true, ..ObserverConfig::default() });
        let mut last = "";
        for &(pick, gap) in &steps {
            last = ALIASES[pick];
            s.native.activate_alias(&*s.layer.registry, last, true);
            s.scheduler.advance(gap.min(9));
        }
        s.scheduler.run_until_idle();

        let emissions = s.emissions.borrow();
        let final_emission = emissions.last().unwrap();
        prop_assert_eq!(final_emission.len(), 1);
        prop_assert_eq!(final_emission[0].mq_alias.as_str(), last);
        prop_assert!(emissions.len() <= steps.len());
    }
}
