//! Coverage translation
//!
//! Every observed source rule is followed through its location into the
//! destination definition. A missing link on either side means the two
//! definitions (or the coverage file) do not belong together, so the whole
//! translation fails. A destination rule that is not semantic is an
//! ordinary outcome: it is logged and left out.

use crate::classify::SemanticRules;
use crate::ident::RuleId;
use crate::index::{LocationIndex, RuleIndex};
use crate::result::{RulecovError, RulecovResult};
use serde::{Deserialize, Serialize};

/// Outcome of translating one coverage list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Destination semantic rules, in observation order
    pub rules: Vec<RuleId>,
    /// Destination rules dropped as non-semantic, in observation order
    pub skipped: Vec<RuleId>,
}

/// Counts describing a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSummary {
    /// Entries in the observed list
    pub observed: usize,
    /// Entries kept
    pub kept: usize,
    /// Entries skipped as non-semantic
    pub skipped: usize,
}

impl Translation {
    /// Kept destination rules
    #[must_use]
    pub fn into_rules(self) -> Vec<RuleId> {
        self.rules
    }

    /// Summary counts
    #[must_use]
    pub fn summary(&self) -> TranslationSummary {
        TranslationSummary {
            observed: self.rules.len() + self.skipped.len(),
            kept: self.rules.len(),
            skipped: self.skipped.len(),
        }
    }
}

/// Maps source coverage onto destination rules
#[derive(Debug, Clone, Copy)]
pub struct CoverageTranslator<'a> {
    source: &'a RuleIndex,
    destination: &'a LocationIndex,
    semantic: &'a SemanticRules,
}

impl<'a> CoverageTranslator<'a> {
    /// Create a translator over a source index, a destination inverse index,
    /// and the destination's semantic rules
    #[must_use]
    pub const fn new(
        source: &'a RuleIndex,
        destination: &'a LocationIndex,
        semantic: &'a SemanticRules,
    ) -> Self {
        Self {
            source,
            destination,
            semantic,
        }
    }

    /// Destination rule corresponding to one observed source rule
    pub fn resolve(&self, observed: &str) -> RulecovResult<&'a RuleId> {
        let observed = observed.trim();
        let Some(location) = self.source.location(observed) else {
            return Err(RulecovError::SourceRuleNotFound {
                rule: observed.to_string(),
            });
        };
        let Some(rule) = self.destination.rule(location.as_str()) else {
            return Err(RulecovError::LocationNotFound {
                location: location.to_string(),
            });
        };
        Ok(rule)
    }

    /// Translate an observed coverage list
    ///
    /// Output order follows input order; nothing is deduplicated. Any lookup
    /// failure aborts the whole list.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn translate<I, S>(&self, observed: I) -> RulecovResult<Translation>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut translation = Translation::default();
        for entry in observed {
            let rule = self.resolve(entry.as_ref())?;
            if self.semantic.contains(rule.as_str()) {
                translation.rules.push(rule.clone());
            } else {
                tracing::info!(%rule, "skipping non-semantic rule");
                translation.skipped.push(rule.clone());
            }
        }
        let summary = translation.summary();
        tracing::debug!(
            observed = summary.observed,
            kept = summary.kept,
            skipped = summary.skipped,
            "translated coverage"
        );
        Ok(translation)
    }
}

/// Translate observed source rules into destination semantic rules
pub fn translate_coverage<I, S>(
    source: &RuleIndex,
    destination: &LocationIndex,
    semantic: &SemanticRules,
    observed: I,
) -> RulecovResult<Vec<RuleId>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    CoverageTranslator::new(source, destination, semantic)
        .translate(observed)
        .map(Translation::into_rules)
}
