//! Property-based tests for rulecov.
//!
//! Uses proptest to check the index and translation invariants on arbitrary
//! rule tables and coverage lists.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use rulecov::{
    translate_coverage, DuplicatePolicy, LocationIndex, RuleId, RuleIndex, RulecovError,
    SemanticRules,
};
use std::collections::HashMap;

/// A consistent pair of rule tables over `n` rules.
///
/// Source rule `r{i}` and destination rule `d{i}` share location `f{i}.k`,
/// reached through different directory prefixes.
fn tables(n: usize) -> (Vec<String>, Vec<String>) {
    let src = (0..n).map(|i| format!("r{i} /src/tree/f{i}.k")).collect();
    let dst = (0..n).map(|i| format!("d{i} /dst/other/f{i}.k")).collect();
    (src, dst)
}

proptest! {
    /// Every well-formed line with a distinct key yields exactly one entry.
    #[test]
    fn prop_index_one_entry_per_line(n in 0usize..60) {
        let (src, dst) = tables(n);
        let forward = RuleIndex::from_lines(&src, DuplicatePolicy::Reject).unwrap();
        let inverse = LocationIndex::from_lines(&dst, DuplicatePolicy::Reject).unwrap();
        prop_assert_eq!(forward.len(), n);
        prop_assert_eq!(inverse.len(), n);
    }

    /// With repeated keys the last line for each key wins.
    #[test]
    fn prop_index_last_line_wins(keys in prop::collection::vec(0usize..8, 0..40)) {
        let lines: Vec<String> = keys
            .iter()
            .enumerate()
            .map(|(line, key)| format!("r{key} f{line}.k"))
            .collect();
        let index = RuleIndex::from_lines(&lines, DuplicatePolicy::LastWins).unwrap();

        let mut expected = HashMap::new();
        for (line, key) in keys.iter().enumerate() {
            expected.insert(format!("r{key}"), format!("f{line}.k"));
        }
        prop_assert_eq!(index.len(), expected.len());
        for (rule, location) in &expected {
            prop_assert_eq!(index.location(rule).unwrap().as_str(), location.as_str());
        }
    }

    /// Output is the semantic subsequence of the mapped input, in order.
    #[test]
    fn prop_translation_is_ordered_semantic_subsequence(
        semantic_mask in prop::collection::vec(any::<bool>(), 1..30),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..50),
    ) {
        let n = semantic_mask.len();
        let (src, dst) = tables(n);
        let forward = RuleIndex::from_lines(&src, DuplicatePolicy::LastWins).unwrap();
        let inverse = LocationIndex::from_lines(&dst, DuplicatePolicy::LastWins).unwrap();
        let semantic: SemanticRules = semantic_mask
            .iter()
            .enumerate()
            .filter(|(_, keep)| **keep)
            .map(|(i, _)| RuleId::new(format!("d{i}")))
            .collect();

        let observed: Vec<usize> = picks.iter().map(|p| p.index(n)).collect();
        let observed_ids: Vec<String> = observed.iter().map(|i| format!("r{i}")).collect();
        let out = translate_coverage(&forward, &inverse, &semantic, &observed_ids).unwrap();

        let expected: Vec<RuleId> = observed
            .iter()
            .filter(|i| semantic_mask[**i])
            .map(|i| RuleId::new(format!("d{i}")))
            .collect();
        prop_assert!(out.len() <= observed_ids.len());
        prop_assert_eq!(out, expected);
    }

    /// A single unknown observation fails the whole translation.
    #[test]
    fn prop_unknown_rule_aborts(n in 1usize..20, position in any::<prop::sample::Index>()) {
        let (src, dst) = tables(n);
        let forward = RuleIndex::from_lines(&src, DuplicatePolicy::LastWins).unwrap();
        let inverse = LocationIndex::from_lines(&dst, DuplicatePolicy::LastWins).unwrap();
        let semantic: SemanticRules = (0..n).map(|i| RuleId::new(format!("d{i}"))).collect();

        let mut observed: Vec<String> = (0..n).map(|i| format!("r{i}")).collect();
        observed.insert(position.index(n + 1), "unknown".to_string());

        let err = translate_coverage(&forward, &inverse, &semantic, &observed).unwrap_err();
        let is_source_miss = matches!(err, RulecovError::SourceRuleNotFound { .. });
        prop_assert!(is_source_miss);
    }
}
