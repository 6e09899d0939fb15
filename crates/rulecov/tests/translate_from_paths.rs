//! End-to-end translation over kompiled directories on disk.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use pretty_assertions::assert_eq;
use rulecov::{
    translate_coverage_from_paths, DuplicatePolicy, KompiledDir, RuleId, RulecovError,
    TranslateConfig, TranslationInputs,
};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn apply(label: &str) -> Value {
    json!({ "node": "KApply", "label": { "node": "KLabel", "name": label, "params": [] }, "arity": 0, "args": [] })
}

fn rule(body: Value, id: &str) -> Value {
    json!({
        "node": "KRule",
        "body": body,
        "requires": { "node": "KToken", "token": "true", "sort": { "node": "KSort", "name": "Bool" } },
        "ensures": { "node": "KToken", "token": "true", "sort": { "node": "KSort", "name": "Bool" } },
        "att": { "node": "KAtt", "att": { "UNIQUE_ID": id } },
    })
}

/// Destination definition: `d1` steps the configuration, `d2` is a function rule.
fn destination_definition() -> Value {
    json!({
        "format": "KAST",
        "version": 2,
        "term": {
            "node": "KDefinition",
            "mainModule": "IMP",
            "modules": [{
                "node": "KFlatModule",
                "name": "IMP",
                "imports": [],
                "localSentences": [
                    rule(json!({ "node": "KRewrite", "lhs": apply("<generatedTop>"), "rhs": apply("<generatedTop>") }), "d1"),
                    rule(json!({ "node": "KRewrite", "lhs": apply("f"), "rhs": apply("g") }), "d2"),
                    { "node": "KProduction", "att": { "node": "KAtt", "att": {} } },
                ],
            }],
        },
    })
}

struct Workspace {
    _tmp: TempDir,
    src: KompiledDir,
    dst: KompiledDir,
    observed: std::path::PathBuf,
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

fn workspace(src_rules: &str, dst_rules: &str, observed: &str) -> Workspace {
    let tmp = TempDir::new().unwrap();
    let src = KompiledDir::new(tmp.path().join("imp-coverage-kompiled"));
    let dst = KompiledDir::new(tmp.path().join("imp-kompiled"));
    fs::create_dir_all(src.root()).unwrap();
    fs::create_dir_all(dst.root()).unwrap();
    write(&src.all_rules(), src_rules);
    write(&dst.all_rules(), dst_rules);
    write(
        &dst.compiled_json(),
        &serde_json::to_string(&destination_definition()).unwrap(),
    );
    let observed_path = tmp.path().join("coverage.txt");
    write(&observed_path, observed);
    Workspace {
        _tmp: tmp,
        src,
        dst,
        observed: observed_path,
    }
}

fn run(ws: &Workspace, config: &TranslateConfig) -> rulecov::RulecovResult<rulecov::Translation> {
    let inputs = TranslationInputs::from_kompiled_dirs(&ws.src, &ws.dst, &ws.observed);
    translate_coverage_from_paths(&inputs, config)
}

#[test]
fn test_translates_and_filters_non_semantic() {
    let ws = workspace(
        "r1 /a/foo.k:(1,1,1,9)\nr2 /a/bar.k:(2,1,2,9)\n",
        "d1 /b/foo.k:(1,1,1,9)\n\nd2 /b/bar.k:(2,1,2,9)\n",
        "r1\nr2\n\nr1\n",
    );
    let translation = run(&ws, &TranslateConfig::default()).unwrap();
    assert_eq!(translation.rules, vec![RuleId::new("d1"), RuleId::new("d1")]);
    assert_eq!(translation.skipped, vec![RuleId::new("d2")]);
}

#[test]
fn test_unknown_observed_rule_fails() {
    let ws = workspace("r1 foo.k\n", "d1 foo.k\n", "r1\nr3\n");
    let err = run(&ws, &TranslateConfig::default()).unwrap_err();
    assert!(matches!(err, RulecovError::SourceRuleNotFound { ref rule } if rule == "r3"));
}

#[test]
fn test_mismatched_location_fails() {
    let ws = workspace("r1 baz.k\n", "d1 foo.k\n", "r1\n");
    let err = run(&ws, &TranslateConfig::default()).unwrap_err();
    assert!(matches!(err, RulecovError::LocationNotFound { ref location } if location == "baz.k"));
}

#[test]
fn test_empty_coverage_file() {
    let ws = workspace("r1 foo.k\n", "d1 foo.k\n", "");
    let translation = run(&ws, &TranslateConfig::default()).unwrap();
    assert!(translation.rules.is_empty());
    assert!(translation.skipped.is_empty());
}

#[test]
fn test_malformed_rule_table_fails() {
    let ws = workspace("r1 foo.k extra\n", "d1 foo.k\n", "r1\n");
    let err = run(&ws, &TranslateConfig::default()).unwrap_err();
    assert!(matches!(err, RulecovError::Format { line: 1, .. }));
}

#[test]
fn test_malformed_line_reported_at_file_position() {
    let ws = workspace("r1 foo.k\n\n\nbroken\n", "d1 foo.k\n", "r1\n");
    let err = run(&ws, &TranslateConfig::default()).unwrap_err();
    match err {
        RulecovError::Format { line, content } => {
            assert_eq!(line, 4);
            assert_eq!(content, "broken");
        }
        other => panic!("expected Format, got {other:?}"),
    }
}

#[test]
fn test_strict_duplicates() {
    let ws = workspace("r1 foo.k\n", "d1 foo.k\nd2 x/foo.k\n", "r1\n");
    let lenient = run(&ws, &TranslateConfig::default()).unwrap();
    assert!(lenient.rules.is_empty());
    assert_eq!(lenient.skipped, vec![RuleId::new("d2")]);

    let strict = TranslateConfig::builder()
        .duplicate_policy(DuplicatePolicy::Reject)
        .build();
    let err = run(&ws, &strict).unwrap_err();
    assert!(matches!(err, RulecovError::DuplicateKey { ref key, line: 2 } if key == "foo.k"));
}

#[test]
fn test_missing_definition_file() {
    let ws = workspace("r1 foo.k\n", "d1 foo.k\n", "r1\n");
    fs::remove_file(ws.dst.compiled_json()).unwrap();
    let err = run(&ws, &TranslateConfig::default()).unwrap_err();
    assert!(matches!(err, RulecovError::Io { .. }));
}

#[test]
fn test_invalid_definition_json() {
    let ws = workspace("r1 foo.k\n", "d1 foo.k\n", "r1\n");
    write(&ws.dst.compiled_json(), "{ not json");
    let err = run(&ws, &TranslateConfig::default()).unwrap_err();
    assert!(matches!(err, RulecovError::Json { .. }));
}
