//! Media change events.
//!
//! A `MediaChange` is either a raw match/unmatch signal for one query or a
//! fully annotated activation carrying the alias metadata of its breakpoint.

use crate::breakpoint::Breakpoint;
use alloc::string::String;
use core::cmp::Reverse;

/// The query used when a change is built without one.
pub const ALL_QUERY: &str = "all";

/// A media query match state change.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MediaChange {
    /// Whether the query matches after this change.
    pub matches: bool,
    /// The query this change concerns.
    pub media_query: String,
    /// Alias of the matching breakpoint, empty for raw or ad-hoc queries.
    pub mq_alias: String,
    /// Suffix of the matching breakpoint, empty for raw or ad-hoc queries.
    pub suffix: String,
    /// Priority of the matching breakpoint, 0 for raw or ad-hoc queries.
    pub priority: i32,
}

impl Default for MediaChange {
    fn default() -> Self {
        Self {
            matches: false,
            media_query: String::from(ALL_QUERY),
            mq_alias: String::new(),
            suffix: String::new(),
            priority: 0,
        }
    }
}

impl MediaChange {
    /// Creates a raw, unannotated change.
    pub fn new(matches: bool, media_query: impl Into<String>) -> Self {
        Self {
            matches,
            media_query: media_query.into(),
            ..Self::default()
        }
    }

    /// Creates a raw activation for `media_query`.
    #[inline]
    pub fn activation(media_query: impl Into<String>) -> Self {
        Self::new(true, media_query)
    }

    /// Creates a raw deactivation for `media_query`.
    #[inline]
    pub fn deactivation(media_query: impl Into<String>) -> Self {
        Self::new(false, media_query)
    }
}

/// Merges breakpoint metadata into a change.
///
/// With a breakpoint, the alias, query, suffix and priority are taken from
/// it. Without one the change passes through untouched.
pub fn merge_alias(mut change: MediaChange, source: Option<&Breakpoint>) -> MediaChange {
    if let Some(bp) = source {
        change.mq_alias.clone_from(&bp.alias);
        change.media_query.clone_from(&bp.media_query);
        change.suffix.clone_from(&bp.suffix);
        change.priority = bp.priority;
    }
    change
}

/// Sorts changes by descending priority.
///
/// The sort is stable: equal priorities keep their relative order.
pub fn sort_descending_priority(changes: &mut [MediaChange]) {
    changes.sort_by_key(|change| Reverse(change.priority));
}
