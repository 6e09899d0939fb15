//! Result and error types for rulecov.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for rulecov operations
pub type RulecovResult<T> = Result<T, RulecovError>;

/// Errors that can occur while translating coverage
#[derive(Debug, Error)]
pub enum RulecovError {
    /// Rule table line did not split into exactly two fields
    #[error("Malformed rule table line {line}: expected `<rule-id> <location>`, got {content:?}")]
    Format {
        /// 1-based line number
        line: usize,
        /// Offending line
        content: String,
    },

    /// Observed rule identifier is missing from the source index
    #[error("Rule identifier not found in source index: {rule}")]
    SourceRuleNotFound {
        /// Observed identifier
        rule: String,
    },

    /// Source location has no counterpart in the destination index
    #[error("Source location not found in destination index: {location}")]
    LocationNotFound {
        /// Source-location key
        location: String,
    },

    /// Key seen twice while duplicates are rejected
    #[error("Duplicate key {key:?} on rule table line {line}")]
    DuplicateKey {
        /// Repeated key
        key: String,
        /// 1-based line number of the repeat
        line: usize,
    },

    /// No rule in the definition carries the requested identifier
    #[error("Could not find rule with ID: {rule}")]
    RuleNotFound {
        /// Requested identifier
        rule: String,
    },

    /// Invalid configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON error
    #[error("JSON error in {}: {source}", path.display())]
    Json {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}

impl RulecovError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error bound to a path
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is one of the two translation lookup failures
    #[must_use]
    pub const fn is_lookup(&self) -> bool {
        matches!(
            self,
            Self::SourceRuleNotFound { .. } | Self::LocationNotFound { .. }
        )
    }
}
