//! Translation configuration
//!
//! Built in code through [`TranslateConfig::builder`] or loaded from YAML:
//!
//! ```yaml
//! top_label: "<generatedTop>"
//! duplicate_policy: reject
//! ```

use crate::classify::TOP_CELL_LABEL;
use crate::result::{RulecovError, RulecovResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do when a rule table repeats a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Later lines overwrite earlier ones
    #[default]
    LastWins,
    /// A repeated key is a hard error
    Reject,
}

/// Settings shared by the index builder and the classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslateConfig {
    /// Label of the top configuration cell marking semantic rules
    pub top_label: String,
    /// Duplicate-key handling for both rule tables
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            top_label: TOP_CELL_LABEL.to_string(),
            duplicate_policy: DuplicatePolicy::LastWins,
        }
    }
}

impl TranslateConfig {
    /// Create a builder for translation config
    #[must_use]
    pub fn builder() -> TranslateConfigBuilder {
        TranslateConfigBuilder::default()
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> RulecovResult<Self> {
        let config: Self =
            serde_yaml_ng::from_str(yaml).map_err(|e| RulecovError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML configuration file
    pub fn from_yaml_file(path: &Path) -> RulecovResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| RulecovError::io(path, e))?;
        Self::from_yaml_str(&yaml)
    }

    fn validate(&self) -> RulecovResult<()> {
        if self.top_label.trim().is_empty() {
            return Err(RulecovError::config("top_label must not be empty"));
        }
        Ok(())
    }
}

/// Builder for translation configuration
#[derive(Debug, Default)]
pub struct TranslateConfigBuilder {
    top_label: Option<String>,
    duplicate_policy: DuplicatePolicy,
}

impl TranslateConfigBuilder {
    /// Set the top configuration label
    #[must_use]
    pub fn top_label(mut self, label: impl Into<String>) -> Self {
        self.top_label = Some(label.into());
        self
    }

    /// Set the duplicate-key policy
    #[must_use]
    pub const fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> TranslateConfig {
        TranslateConfig {
            top_label: self
                .top_label
                .filter(|label| !label.trim().is_empty())
                .unwrap_or_else(|| TOP_CELL_LABEL.to_string()),
            duplicate_policy: self.duplicate_policy,
        }
    }
}
