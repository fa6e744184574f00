//! Vista Core - Breakpoint types and registry for Vista.
//!
//! This crate provides the foundational types of the responsive layer:
//!
//! - `Breakpoint`: a named, prioritized media query with an overlap flag
//! - `MediaChange`: a raw or annotated media query match change
//! - `BreakpointRegistry`: the static table answering alias and query lookups
//! - `LayoutConfig`: built-in tables plus custom breakpoints merged by alias
//! - `Error`: errors raised while building configuration
//!
//! # Example
//!
//! ```rust
//! use vista_core::{merge_alias, BreakpointLookup, LayoutConfig, MediaChange};
//!
//! let registry = LayoutConfig::default().build_registry().unwrap();
//! let bp = registry.find_by_alias("gt-md").unwrap();
//!
//! let change = merge_alias(MediaChange::activation(bp.media_query.clone()), Some(bp));
//! assert_eq!(change.mq_alias, "gt-md");
//! assert_eq!(change.suffix, "GtMd");
//! ```

#![no_std]

extern crate alloc;

mod breakpoint;
mod config;
pub mod defaults;
mod error;
mod media_change;
mod registry;

pub use breakpoint::{suffix_for, Breakpoint};
pub use config::{merge_by_alias, CustomBreakpoint, LayoutConfig};
pub use defaults::{default_breakpoints, orientation_breakpoints, PRINT_QUERY};
pub use error::{Error, Result};
pub use media_change::{merge_alias, sort_descending_priority, MediaChange, ALL_QUERY};
pub use registry::{BreakpointLookup, BreakpointRegistry};
