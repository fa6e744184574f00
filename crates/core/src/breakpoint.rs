//! Breakpoint definitions.
//!
//! A `Breakpoint` names a media query, ranks it with a priority and records
//! whether its range overlaps other breakpoints.

use alloc::string::String;

/// A named, prioritized media query.
///
/// Breakpoints are immutable once registered. The priority is resolved to a
/// concrete value here; unset priorities become 0 and no later stage applies
/// another fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Breakpoint {
    /// Short name, e.g. `gt-md`.
    pub alias: String,
    /// Raw media query string handed to the platform.
    pub media_query: String,
    /// PascalCase form of the alias, e.g. `GtMd`.
    pub suffix: String,
    /// Higher values sort first.
    pub priority: i32,
    /// True when the range is not mutually exclusive with other breakpoints.
    pub overlapping: bool,
}

impl Breakpoint {
    /// Creates a non-overlapping breakpoint with priority 0.
    ///
    /// The suffix is derived from the alias.
    pub fn new(alias: impl Into<String>, media_query: impl Into<String>) -> Self {
        let alias = alias.into();
        let suffix = suffix_for(&alias);
        Self {
            alias,
            media_query: media_query.into(),
            suffix,
            priority: 0,
            overlapping: false,
        }
    }

    /// Sets the priority.
    #[inline]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Marks the breakpoint as overlapping.
    #[inline]
    pub fn overlapping(mut self, overlapping: bool) -> Self {
        self.overlapping = overlapping;
        self
    }

    /// Overrides the derived suffix.
    #[inline]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

/// Derives the suffix for an alias.
///
/// The alias is split on `.`, `-` and `_`; every part gets an upper-cased
/// first character and the parts are joined back together.
///
/// ```rust
/// use vista_core::suffix_for;
///
/// assert_eq!(suffix_for("gt-md"), "GtMd");
/// assert_eq!(suffix_for("handset.landscape"), "HandsetLandscape");
/// ```
pub fn suffix_for(alias: &str) -> String {
    let mut suffix = String::with_capacity(alias.len());
    for part in alias.split(['.', '-', '_']) {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            suffix.extend(first.to_uppercase());
            suffix.push_str(chars.as_str());
        }
    }
    suffix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_new_defaults() {
        let bp = Breakpoint::new("md", "(min-width: 960px)");
        assert_eq!(bp.alias, "md");
        assert_eq!(bp.media_query, "(min-width: 960px)");
        assert_eq!(bp.suffix, "Md");
        assert_eq!(bp.priority, 0);
        assert!(!bp.overlapping);
    }

    #[test]
    fn test_breakpoint_builders() {
        let bp = Breakpoint::new("gt-sm", "(min-width: 960px)")
            .with_priority(-850)
            .overlapping(true)
            .with_suffix("Wide");
        assert_eq!(bp.priority, -850);
        assert!(bp.overlapping);
        assert_eq!(bp.suffix, "Wide");
    }

    #[test]
    fn test_suffix_for() {
        assert_eq!(suffix_for("xs"), "Xs");
        assert_eq!(suffix_for("lt-xl"), "LtXl");
        assert_eq!(suffix_for("web.portrait"), "WebPortrait");
        assert_eq!(suffix_for("print_only"), "PrintOnly");
        assert_eq!(suffix_for(""), "");
        // Empty parts from doubled delimiters vanish
        assert_eq!(suffix_for("a--b"), "AB");
    }
}
