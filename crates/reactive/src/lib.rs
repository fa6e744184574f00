//! Vista Reactive - Breakpoint activation observation.
//!
//! This crate turns the host's independent media query signals into one
//! debounced, prioritized stream of breakpoint activations.
//!
//! # Core Concepts
//!
//! - `MatchMedia`: Wraps the native media query primitive, one handle per query
//! - `PrintHook`: Tracks the print context and substitutes print breakpoints
//! - `MediaObserver`: Aggregates raw signals into sorted activation lists
//! - `Scheduler`: Defers the debounce flush to the host's timer
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use vista_core::LayoutConfig;
//! use vista_reactive::{ManualScheduler, MediaLayer, MockMatchMedia, ObserverConfig};
//!
//! let native = Rc::new(MockMatchMedia::new());
//! let scheduler = Rc::new(ManualScheduler::new());
//! let layer = MediaLayer::new(
//!     native.clone(),
//!     scheduler.clone(),
//!     &LayoutConfig::default(),
//!     ObserverConfig::default(),
//! )
//! .unwrap();
//!
//! layer.observer.subscribe(|changes| {
//!     for change in changes {
//!         println!("{} ({})", change.mq_alias, change.priority);
//!     }
//! });
//!
//! native.activate_alias(&*layer.registry, "sm", true);
//! scheduler.advance(10);
//! ```

#![no_std]

extern crate alloc;

#[macro_use]
mod log;

pub mod layer;
pub mod matcher;
pub mod mock;
pub mod observer;
pub mod print_hook;
pub mod scheduler;
pub mod subscription;

pub use layer::MediaLayer;
pub use matcher::{MatchMedia, MediaCallback, MediaListener, MediaMatcher, MediaQueryProvider, NativeMediaQuery};
pub use mock::{MockMatchMedia, MockMediaQueryList};
pub use observer::{MediaObserver, ObserverConfig, DEFAULT_DEBOUNCE_MS};
pub use print_hook::{PrintHook, PrintInterceptor, PrintTransition};
pub use scheduler::{ManualScheduler, Scheduler, Task};
pub use subscription::{Subscription, SubscriptionId, SubscriptionManager};

// Re-export commonly used types from dependencies
pub use vista_core::{Breakpoint, BreakpointLookup, BreakpointRegistry, LayoutConfig, MediaChange};
