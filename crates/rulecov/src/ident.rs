//! Type-safe rule identifiers and source-location keys.
//!
//! A rule identifier and a location key are both strings on disk, but they
//! live in different key spaces. Keeping them as distinct types stops a
//! lookup from using one where the other belongs.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// `UNIQUE_ID` of a rule within one compiled definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    /// Create a rule identifier, trimming surrounding whitespace
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_string())
    }

    /// Borrow the identifier text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RuleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Normalized origin of a rule: the file name without leading directories
///
/// Two compilations of the same rule set agree on this key even when they
/// were built from different checkouts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceLocation(String);

impl SourceLocation {
    /// Normalize a declared location to its last `/` component, trimmed
    #[must_use]
    pub fn from_declared(location: &str) -> Self {
        let last = location.rsplit('/').next().unwrap_or(location);
        Self(last.trim().to_string())
    }

    /// Borrow the key text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SourceLocation {
    fn borrow(&self) -> &str {
        &self.0
    }
}
