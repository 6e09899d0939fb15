//! Rule lookup and coverage-logger removal
//!
//! `kompile --coverage` instruments each rule so that its right-hand side
//! becomes `project:K(logger ~> original)`. Stripping that wrapper recovers
//! the rule as written, which is what a reader of a coverage report wants to
//! see next to a rule identifier.

use crate::kast::KastModel;
use crate::result::{RulecovError, RulecovResult};

/// Label prefix of the projection wrapping an instrumented right-hand side
pub const PROJECTION_PREFIX: &str = "project:";

/// First rule sentence of `definition` whose `UNIQUE_ID` is `rule`
pub fn rule_by_id<'d, M: KastModel>(
    model: &M,
    definition: &'d M::Term,
    rule: &str,
) -> RulecovResult<&'d M::Term> {
    model
        .modules(definition)
        .iter()
        .flat_map(|module| model.local_sentences(module))
        .find(|sentence| model.is_rule(sentence) && model.unique_id(sentence) == Some(rule))
        .ok_or_else(|| RulecovError::RuleNotFound {
            rule: rule.to_string(),
        })
}

fn strip_logger_body<M>(model: &M, body: &M::Term) -> Option<M::Term>
where
    M: KastModel,
    M::Term: Clone,
{
    if !model.is_rewrite(body) {
        return None;
    }
    let lhs = model.lhs(body)?;
    let rhs = model.rhs(body)?;
    if !model.is_apply(rhs) || !model.label(rhs)?.starts_with(PROJECTION_PREFIX) {
        return None;
    }
    let sequence = model.args(rhs).first()?;
    if !model.is_sequence(sequence) {
        return None;
    }
    match model.items(sequence) {
        [_logger, original] => Some(model.rewrite(lhs.clone(), original.clone())),
        _ => None,
    }
}

/// Rebuild `rule` without its coverage logger
///
/// Rules that were not instrumented come back structurally unchanged.
/// `requires`, `ensures` and attributes are carried over as they are.
pub fn strip_coverage_logger<M>(model: &M, rule: &M::Term) -> M::Term
where
    M: KastModel,
    M::Term: Clone,
{
    let Some(body) = model.body(rule) else {
        return rule.clone();
    };
    let body = strip_logger_body(model, body).unwrap_or_else(|| body.clone());
    model.rule(
        body,
        model.requires(rule).cloned(),
        model.ensures(rule).cloned(),
        model.att(rule).cloned(),
    )
}
