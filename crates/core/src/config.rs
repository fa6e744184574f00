//! Layout configuration and breakpoint merging.

use crate::breakpoint::{suffix_for, Breakpoint};
use crate::defaults::{default_breakpoints, orientation_breakpoints};
use crate::error::{Error, Result};
use crate::registry::BreakpointRegistry;
use alloc::string::String;
use alloc::vec::Vec;

/// A user-supplied breakpoint, possibly partial.
///
/// When the alias already exists the present fields override the existing
/// breakpoint; otherwise the entry defines a new breakpoint and must carry
/// a media query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CustomBreakpoint {
    pub alias: String,
    pub media_query: Option<String>,
    pub priority: Option<i32>,
    pub overlapping: Option<bool>,
    pub suffix: Option<String>,
}

impl CustomBreakpoint {
    /// Creates an entry that only names an alias.
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            ..Self::default()
        }
    }

    /// Sets the media query.
    pub fn media_query(mut self, media_query: impl Into<String>) -> Self {
        self.media_query = Some(media_query.into());
        self
    }

    /// Sets the priority.
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the overlap flag.
    pub fn overlapping(mut self, overlapping: bool) -> Self {
        self.overlapping = Some(overlapping);
        self
    }

    /// Sets the suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    fn extend(&self, target: &mut Breakpoint) {
        if let Some(ref media_query) = self.media_query {
            target.media_query.clone_from(media_query);
        }
        if let Some(priority) = self.priority {
            target.priority = priority;
        }
        if let Some(overlapping) = self.overlapping {
            target.overlapping = overlapping;
        }
        if let Some(ref suffix) = self.suffix {
            target.suffix.clone_from(suffix);
        }
    }

    fn into_breakpoint(self) -> Result<Breakpoint> {
        let media_query = self
            .media_query
            .ok_or_else(|| Error::invalid_breakpoint(self.alias.clone(), "missing media query"))?;
        let suffix = self.suffix.unwrap_or_else(|| suffix_for(&self.alias));
        Ok(Breakpoint {
            alias: self.alias,
            media_query,
            suffix,
            priority: self.priority.unwrap_or(0),
            overlapping: self.overlapping.unwrap_or(false),
        })
    }
}

/// Merges custom breakpoints into a default list by alias.
///
/// Custom entries sharing an alias with a default extend it field by
/// field; the rest are appended in their given order.
pub fn merge_by_alias(defaults: Vec<Breakpoint>, custom: Vec<CustomBreakpoint>) -> Result<Vec<Breakpoint>> {
    let mut merged = defaults;
    for entry in custom {
        if entry.alias.is_empty() {
            return Err(Error::invalid_breakpoint("", "alias must not be empty"));
        }
        match merged.iter_mut().find(|bp| bp.alias == entry.alias) {
            Some(existing) => entry.extend(existing),
            None => merged.push(entry.into_breakpoint()?),
        }
    }
    Ok(merged)
}

/// Breakpoint table configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LayoutConfig {
    /// Leave the default width breakpoints out of the table.
    pub disable_default_bps: bool,
    /// Add the handset/tablet/web orientation breakpoints.
    pub add_orientation_bps: bool,
    /// Aliases whose breakpoints stand in for the `print` query while printing.
    pub print_with_breakpoints: Vec<String>,
    /// Custom breakpoints merged over the built-in tables.
    pub breakpoints: Vec<CustomBreakpoint>,
}

impl LayoutConfig {
    /// Returns the merged breakpoint list this config describes.
    pub fn breakpoint_list(&self) -> Result<Vec<Breakpoint>> {
        let mut defaults = if self.disable_default_bps {
            Vec::new()
        } else {
            default_breakpoints()
        };
        if self.add_orientation_bps {
            defaults.extend(orientation_breakpoints());
        }
        merge_by_alias(defaults, self.breakpoints.clone())
    }

    /// Builds the registry this config describes.
    pub fn build_registry(&self) -> Result<BreakpointRegistry> {
        BreakpointRegistry::new(self.breakpoint_list()?)
    }
}
