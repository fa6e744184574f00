//! Error types for Vista.

use alloc::string::String;
use core::fmt;

/// Result type alias for Vista operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types raised while building breakpoint configuration.
///
/// Lookups never fail: an unknown alias or query is a plain `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A breakpoint definition is incomplete or malformed.
    InvalidBreakpoint {
        alias: String,
        message: String,
    },
    /// Two breakpoints were registered under the same alias.
    DuplicateAlias {
        alias: String,
    },
    /// Layout or observer configuration could not be used.
    InvalidConfig {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBreakpoint { alias, message } => {
                write!(f, "Invalid breakpoint '{}': {}", alias, message)
            }
            Error::DuplicateAlias { alias } => {
                write!(f, "Duplicate breakpoint alias: {}", alias)
            }
            Error::InvalidConfig { message } => {
                write!(f, "Invalid config: {}", message)
            }
        }
    }
}

impl Error {
    /// Creates an invalid breakpoint error.
    pub fn invalid_breakpoint(alias: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidBreakpoint {
            alias: alias.into(),
            message: message.into(),
        }
    }

    /// Creates a duplicate alias error.
    pub fn duplicate_alias(alias: impl Into<String>) -> Self {
        Error::DuplicateAlias {
            alias: alias.into(),
        }
    }

    /// Creates an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_breakpoint("tv", "missing media query");
        assert!(err.to_string().contains("tv"));
        assert!(err.to_string().contains("missing media query"));

        let err = Error::duplicate_alias("md");
        assert_eq!(err.to_string(), "Duplicate breakpoint alias: md");

        let err = Error::invalid_config("debounce must be finite");
        assert!(err.to_string().starts_with("Invalid config"));
    }

    #[test]
    fn test_error_constructors() {
        let err = Error::duplicate_alias("gt-md");
        match err {
            Error::DuplicateAlias { alias } => assert_eq!(alias, "gt-md"),
            _ => panic!("Wrong error type"),
        }
    }
}
