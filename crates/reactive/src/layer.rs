//! Wiring of the observation stack.

use crate::matcher::{MatchMedia, MediaQueryProvider};
use crate::observer::{MediaObserver, ObserverConfig};
use crate::print_hook::PrintHook;
use crate::scheduler::Scheduler;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use vista_core::{BreakpointLookup, BreakpointRegistry, LayoutConfig, Result};

/// A registry, matcher, print hook and observer sharing one native primitive.
pub struct MediaLayer {
    pub registry: Rc<BreakpointRegistry>,
    pub matcher: MatchMedia,
    pub hook: Rc<PrintHook>,
    pub observer: MediaObserver,
}

impl MediaLayer {
    /// Builds the stack from a layout configuration.
    pub fn new(
        provider: Rc<dyn MediaQueryProvider>,
        scheduler: Rc<dyn Scheduler>,
        layout: &LayoutConfig,
        config: ObserverConfig,
    ) -> Result<Self> {
        let registry = layout.build_registry()?;
        Ok(Self::from_registry(
            provider,
            scheduler,
            registry,
            layout.print_with_breakpoints.clone(),
            config,
        ))
    }

    /// Builds the stack around an existing registry.
    pub fn from_registry(
        provider: Rc<dyn MediaQueryProvider>,
        scheduler: Rc<dyn Scheduler>,
        registry: BreakpointRegistry,
        print_aliases: Vec<String>,
        config: ObserverConfig,
    ) -> Self {
        let registry = Rc::new(registry);
        let lookup: Rc<dyn BreakpointLookup> = registry.clone();
        let matcher = MatchMedia::new(provider);

        let hook = Rc::new(PrintHook::new(lookup.clone(), print_aliases));
        hook.attach(&matcher);

        let observer = MediaObserver::new(
            lookup,
            Rc::new(matcher.clone()),
            hook.clone(),
            scheduler,
            config,
        );

        Self {
            registry,
            matcher,
            hook,
            observer,
        }
    }
}
