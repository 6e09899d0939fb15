//! Semantic-rule classification
//!
//! A rule is semantic when it matches on the whole configuration, i.e. its
//! body (or the left-hand side of its rewrite) is an application of the top
//! cell. Everything else is a function, macro or bookkeeping rule that a
//! coverage report should not count as an observable step.

use crate::ident::RuleId;
use crate::kast::{KastModel, NodeKind};
use std::collections::HashSet;

/// Label of the top configuration cell generated by `kompile`
pub const TOP_CELL_LABEL: &str = "<generatedTop>";

/// Whether a rule body touches the top configuration cell
pub fn is_semantic_body<M: KastModel>(model: &M, body: &M::Term, top_label: &str) -> bool {
    match model.kind(body) {
        NodeKind::Apply => model.label(body) == Some(top_label),
        NodeKind::Rewrite => model
            .lhs(body)
            .is_some_and(|lhs| model.is_apply(lhs) && model.label(lhs) == Some(top_label)),
        _ => false,
    }
}

/// Identifiers of the semantic rules of one definition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemanticRules {
    rules: HashSet<RuleId>,
}

impl SemanticRules {
    /// Scan every rule sentence of `definition`
    ///
    /// Rules without a `UNIQUE_ID` are left out: coverage data cannot name them.
    pub fn classify<M: KastModel>(model: &M, definition: &M::Term, top_label: &str) -> Self {
        let mut rules = HashSet::new();
        let mut scanned = 0usize;
        for sentence in model.sentences(definition).filter(|s| model.is_rule(s)) {
            scanned += 1;
            let semantic = model
                .body(sentence)
                .is_some_and(|body| is_semantic_body(model, body, top_label));
            if !semantic {
                continue;
            }
            if let Some(id) = model.unique_id(sentence) {
                rules.insert(RuleId::new(id));
            }
        }
        tracing::debug!(
            scanned,
            semantic = rules.len(),
            top_label,
            "classified definition rules"
        );
        Self { rules }
    }

    /// Whether a rule is semantic
    #[must_use]
    pub fn contains(&self, rule: &str) -> bool {
        self.rules.contains(rule)
    }

    /// Number of semantic rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule is semantic
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &RuleId> {
        self.rules.iter()
    }
}

impl FromIterator<RuleId> for SemanticRules {
    fn from_iter<I: IntoIterator<Item = RuleId>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
