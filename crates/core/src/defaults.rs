//! Built-in breakpoint tables.
//!
//! The default table follows the Material layout grid: five exclusive
//! ranges (`xs`..`xl`) plus overlapping `lt-*` and `gt-*` ranges. Upper
//! bounds end in `.98px` so adjacent ranges never match together at
//! fractional widths.

use crate::breakpoint::Breakpoint;
use alloc::vec::Vec;

/// The media query used to detect print rendering.
pub const PRINT_QUERY: &str = "print";

/// A static breakpoint definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreakpointDef {
    pub alias: &'static str,
    pub media_query: &'static str,
    pub priority: i32,
    pub overlapping: bool,
}

impl BreakpointDef {
    const fn new(alias: &'static str, media_query: &'static str, priority: i32, overlapping: bool) -> Self {
        Self {
            alias,
            media_query,
            priority,
            overlapping,
        }
    }

    /// Builds an owned breakpoint from this definition.
    pub fn to_breakpoint(&self) -> Breakpoint {
        Breakpoint::new(self.alias, self.media_query)
            .with_priority(self.priority)
            .overlapping(self.overlapping)
    }
}

/// Exclusive and overlapping viewport width breakpoints.
pub const DEFAULT_BREAKPOINTS: &[BreakpointDef] = &[
    BreakpointDef::new("xs", "screen and (min-width: 0px) and (max-width: 599.98px)", 1000, false),
    BreakpointDef::new("sm", "screen and (min-width: 600px) and (max-width: 959.98px)", 900, false),
    BreakpointDef::new("md", "screen and (min-width: 960px) and (max-width: 1279.98px)", 800, false),
    BreakpointDef::new("lg", "screen and (min-width: 1280px) and (max-width: 1919.98px)", 700, false),
    BreakpointDef::new("xl", "screen and (min-width: 1920px) and (max-width: 4999.98px)", 600, false),
    BreakpointDef::new("lt-sm", "screen and (max-width: 599.98px)", 950, true),
    BreakpointDef::new("lt-md", "screen and (max-width: 959.98px)", 850, true),
    BreakpointDef::new("lt-lg", "screen and (max-width: 1279.98px)", 750, true),
    BreakpointDef::new("lt-xl", "screen and (max-width: 1919.98px)", 650, true),
    BreakpointDef::new("gt-xs", "screen and (min-width: 600px)", -950, true),
    BreakpointDef::new("gt-sm", "screen and (min-width: 960px)", -850, true),
    BreakpointDef::new("gt-md", "screen and (min-width: 1280px)", -750, true),
    BreakpointDef::new("gt-lg", "screen and (min-width: 1920px)", -650, true),
];

const HANDSET_PORTRAIT: &str = "(orientation: portrait) and (max-width: 599.98px)";
const HANDSET_LANDSCAPE: &str = "(orientation: landscape) and (max-width: 959.98px)";
const TABLET_PORTRAIT: &str = "(orientation: portrait) and (min-width: 600px) and (max-width: 839.98px)";
const TABLET_LANDSCAPE: &str = "(orientation: landscape) and (min-width: 960px) and (max-width: 1279.98px)";
const WEB_PORTRAIT: &str = "(orientation: portrait) and (min-width: 840px)";
const WEB_LANDSCAPE: &str = "(orientation: landscape) and (min-width: 1280px)";

/// Device-class breakpoints keyed on orientation.
///
/// The combined `handset`, `tablet` and `web` queries are comma-separated
/// media query lists matching either orientation.
pub const ORIENTATION_BREAKPOINTS: &[BreakpointDef] = &[
    BreakpointDef::new(
        "handset",
        "(orientation: portrait) and (max-width: 599.98px), (orientation: landscape) and (max-width: 959.98px)",
        2000,
        false,
    ),
    BreakpointDef::new("handset.landscape", HANDSET_LANDSCAPE, 2000, false),
    BreakpointDef::new("handset.portrait", HANDSET_PORTRAIT, 2000, false),
    BreakpointDef::new(
        "tablet",
        "(orientation: portrait) and (min-width: 600px) and (max-width: 839.98px), (orientation: landscape) and (min-width: 960px) and (max-width: 1279.98px)",
        2100,
        false,
    ),
    BreakpointDef::new("tablet.landscape", TABLET_LANDSCAPE, 2100, false),
    BreakpointDef::new("tablet.portrait", TABLET_PORTRAIT, 2100, false),
    BreakpointDef::new(
        "web",
        "(orientation: portrait) and (min-width: 840px), (orientation: landscape) and (min-width: 1280px)",
        2200,
        true,
    ),
    BreakpointDef::new("web.landscape", WEB_LANDSCAPE, 2200, true),
    BreakpointDef::new("web.portrait", WEB_PORTRAIT, 2200, true),
];

/// Returns the default width breakpoints.
pub fn default_breakpoints() -> Vec<Breakpoint> {
    DEFAULT_BREAKPOINTS.iter().map(BreakpointDef::to_breakpoint).collect()
}

/// Returns the orientation breakpoints.
pub fn orientation_breakpoints() -> Vec<Breakpoint> {
    ORIENTATION_BREAKPOINTS.iter().map(BreakpointDef::to_breakpoint).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{BreakpointLookup, BreakpointRegistry};

    #[test]
    fn test_default_breakpoints_register() {
        let registry = BreakpointRegistry::new(default_breakpoints()).unwrap();
        assert_eq!(registry.len(), 13);
        assert_eq!(registry.find_by_alias("gt-md").unwrap().suffix, "GtMd");
    }

    #[test]
    fn test_exclusive_ranges_outrank_gt_ranges() {
        let registry = BreakpointRegistry::new(default_breakpoints()).unwrap();
        let md = registry.find_by_alias("md").unwrap();
        let gt_sm = registry.find_by_alias("gt-sm").unwrap();
        assert!(!md.overlapping);
        assert!(gt_sm.overlapping);
        assert!(md.priority > gt_sm.priority);
    }

    #[test]
    fn test_orientation_queries_combine_parts() {
        let handset = ORIENTATION_BREAKPOINTS[0];
        assert!(handset.media_query.contains(HANDSET_PORTRAIT));
        assert!(handset.media_query.contains(HANDSET_LANDSCAPE));

        let tablet = ORIENTATION_BREAKPOINTS[3];
        assert!(tablet.media_query.contains(TABLET_PORTRAIT));
        assert!(tablet.media_query.contains(TABLET_LANDSCAPE));

        let web = ORIENTATION_BREAKPOINTS[6];
        assert!(web.media_query.contains(WEB_PORTRAIT));
        assert!(web.media_query.contains(WEB_LANDSCAPE));
    }

    #[test]
    fn test_orientation_breakpoints_register_alongside_defaults() {
        let mut all = default_breakpoints();
        all.extend(orientation_breakpoints());
        let registry = BreakpointRegistry::new(all).unwrap();
        assert_eq!(registry.find_by_alias("handset.portrait").unwrap().suffix, "HandsetPortrait");
        assert!(registry.find_by_alias("web").unwrap().overlapping);
    }
}
