//! Breakpoint registry.
//!
//! The registry is the static table of known breakpoints. It answers alias
//! and query lookups; absence is a normal `None`.

use crate::breakpoint::Breakpoint;
use crate::error::{Error, Result};
use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;

/// Read-only breakpoint lookups.
///
/// The reactive layer depends on this trait rather than on
/// `BreakpointRegistry` so hosts can supply their own table.
pub trait BreakpointLookup {
    /// Finds a breakpoint by its alias.
    fn find_by_alias(&self, alias: &str) -> Option<&Breakpoint>;

    /// Finds a breakpoint by its raw media query.
    fn find_by_query(&self, query: &str) -> Option<&Breakpoint>;

    /// Returns all breakpoints in registration order.
    fn items(&self) -> &[Breakpoint];

    /// Returns the media queries of all breakpoints in registration order.
    fn queries(&self) -> Vec<String> {
        self.items().iter().map(|bp| bp.media_query.clone()).collect()
    }
}

/// The static table of known breakpoints.
///
/// # Example
///
/// ```rust
/// use vista_core::{Breakpoint, BreakpointLookup, BreakpointRegistry};
///
/// let registry = BreakpointRegistry::new(vec![
///     Breakpoint::new("sm", "(min-width: 600px) and (max-width: 959.98px)").with_priority(900),
///     Breakpoint::new("gt-xs", "(min-width: 600px)").overlapping(true),
/// ])
/// .unwrap();
///
/// assert_eq!(registry.find_by_alias("sm").map(|bp| bp.priority), Some(900));
/// assert!(registry.find_by_query("(min-width: 600px)").unwrap().overlapping);
/// assert!(registry.find_by_alias("xl").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct BreakpointRegistry {
    /// Breakpoints in registration order
    items: Vec<Breakpoint>,
    /// Alias -> index into `items`
    by_alias: HashMap<String, usize>,
    /// Media query -> index into `items` (first registration wins)
    by_query: HashMap<String, usize>,
}

impl BreakpointRegistry {
    /// Builds a registry from an ordered list of breakpoints.
    ///
    /// Fails on an empty alias or when an alias is registered twice.
    pub fn new(items: Vec<Breakpoint>) -> Result<Self> {
        let mut by_alias = HashMap::with_capacity(items.len());
        let mut by_query = HashMap::with_capacity(items.len());

        for (index, bp) in items.iter().enumerate() {
            if bp.alias.is_empty() {
                return Err(Error::invalid_breakpoint(
                    bp.alias.clone(),
                    "alias must not be empty",
                ));
            }
            if by_alias.insert(bp.alias.clone(), index).is_some() {
                return Err(Error::duplicate_alias(bp.alias.clone()));
            }
            by_query.entry(bp.media_query.clone()).or_insert(index);
        }

        Ok(Self {
            items,
            by_alias,
            by_query,
        })
    }

    /// Returns the number of registered breakpoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no breakpoints are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the breakpoints whose ranges overlap others.
    pub fn overlappings(&self) -> Vec<&Breakpoint> {
        self.items.iter().filter(|bp| bp.overlapping).collect()
    }

    /// Returns all aliases in registration order.
    pub fn aliases(&self) -> Vec<&str> {
        self.items.iter().map(|bp| bp.alias.as_str()).collect()
    }

    /// Returns all suffixes in registration order.
    pub fn suffixes(&self) -> Vec<&str> {
        self.items.iter().map(|bp| bp.suffix.as_str()).collect()
    }
}

impl BreakpointLookup for BreakpointRegistry {
    fn find_by_alias(&self, alias: &str) -> Option<&Breakpoint> {
        self.by_alias.get(alias).map(|&index| &self.items[index])
    }

    fn find_by_query(&self, query: &str) -> Option<&Breakpoint> {
        self.by_query.get(query).map(|&index| &self.items[index])
    }

    #[inline]
    fn items(&self) -> &[Breakpoint] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> Vec<Breakpoint> {
        vec![
            Breakpoint::new("xs", "(max-width: 599.98px)").with_priority(1000),
            Breakpoint::new("sm", "(min-width: 600px) and (max-width: 959.98px)").with_priority(900),
            Breakpoint::new("gt-xs", "(min-width: 600px)")
                .with_priority(-950)
                .overlapping(true),
        ]
    }

    #[test]
    fn test_registry_new() {
        let registry = BreakpointRegistry::new(sample()).unwrap();
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_registry_empty() {
        let registry = BreakpointRegistry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.find_by_alias("xs").is_none());
    }

    #[test]
    fn test_find_by_alias() {
        let registry = BreakpointRegistry::new(sample()).unwrap();
        let bp = registry.find_by_alias("sm").unwrap();
        assert_eq!(bp.media_query, "(min-width: 600px) and (max-width: 959.98px)");
        assert!(registry.find_by_alias("md").is_none());
    }

    #[test]
    fn test_find_by_query() {
        let registry = BreakpointRegistry::new(sample()).unwrap();
        let bp = registry.find_by_query("(min-width: 600px)").unwrap();
        assert_eq!(bp.alias, "gt-xs");
        assert!(registry.find_by_query("print").is_none());
    }

    #[test]
    fn test_items_keep_registration_order() {
        let registry = BreakpointRegistry::new(sample()).unwrap();
        assert_eq!(registry.aliases(), vec!["xs", "sm", "gt-xs"]);
        assert_eq!(registry.suffixes(), vec!["Xs", "Sm", "GtXs"]);
        assert_eq!(registry.items()[0].alias, "xs");
        assert_eq!(
            registry.queries(),
            vec!["(max-width: 599.98px)", "(min-width: 600px) and (max-width: 959.98px)", "(min-width: 600px)"]
        );
    }

    #[test]
    fn test_overlappings() {
        let registry = BreakpointRegistry::new(sample()).unwrap();
        let overlapping = registry.overlappings();
        assert_eq!(overlapping.len(), 1);
        assert_eq!(overlapping[0].alias, "gt-xs");
    }

    #[test]
    fn test_duplicate_alias_rejected() {
        let mut items = sample();
        items.push(Breakpoint::new("xs", "(max-width: 100px)"));
        let err = BreakpointRegistry::new(items).unwrap_err();
        assert_eq!(err, Error::duplicate_alias("xs"));
    }

    #[test]
    fn test_empty_alias_rejected() {
        let err = BreakpointRegistry::new(vec![Breakpoint::new("", "screen")]).unwrap_err();
        assert!(matches!(err, Error::InvalidBreakpoint { .. }));
    }

    #[test]
    fn test_shared_query_first_wins() {
        let registry = BreakpointRegistry::new(vec![
            Breakpoint::new("wide", "(min-width: 1280px)").with_priority(1),
            Breakpoint::new("gt-md", "(min-width: 1280px)").with_priority(2),
        ])
        .unwrap();
        assert_eq!(registry.find_by_query("(min-width: 1280px)").unwrap().alias, "wide");
        assert_eq!(registry.find_by_alias("gt-md").unwrap().priority, 2);
    }
}
