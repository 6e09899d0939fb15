//! rulecov: rule-coverage translation between kompiled K definitions
//!
//! A K definition compiled with `kompile --coverage` stamps every rule with a
//! `UNIQUE_ID` and records which rules fired during a run. Those identifiers
//! are meaningless to a second compilation of the same semantics (for
//! example one built without instrumentation). rulecov follows each rule
//! through its source location into the other compilation and keeps only
//! the rules that step the whole configuration.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    RULECOV Pipeline                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  src allRules.txt ──► RuleIndex      (rule id → location)       │
//! │  dst allRules.txt ──► LocationIndex  (location → rule id)       │
//! │  dst compiled.json ─► SemanticRules  (<generatedTop> rules)     │
//! │                            │                                    │
//! │  observed rules ──► CoverageTranslator ──► dst semantic rules   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use rulecov::{translate_coverage, DuplicatePolicy, LocationIndex, RuleId, RuleIndex, SemanticRules};
//!
//! let src = RuleIndex::from_lines(["r1 foo.k", "r2 bar.k"], DuplicatePolicy::LastWins)?;
//! let dst = LocationIndex::from_lines(["d1 foo.k", "d2 bar.k"], DuplicatePolicy::LastWins)?;
//! let semantic: SemanticRules = [RuleId::new("d1")].into_iter().collect();
//!
//! let rules = translate_coverage(&src, &dst, &semantic, ["r1", "r2"])?;
//! assert_eq!(rules, vec![RuleId::new("d1")]);
//! # Ok::<(), rulecov::RulecovError>(())
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod config;
mod ident;
pub mod index;
pub mod kast;
pub mod kompiled;
mod result;
pub mod rules;
pub mod translate;

pub use classify::{is_semantic_body, SemanticRules, TOP_CELL_LABEL};
pub use config::{DuplicatePolicy, TranslateConfig, TranslateConfigBuilder};
pub use ident::{RuleId, SourceLocation};
pub use index::{parse_rule_line, LocationIndex, RuleIndex};
pub use kast::{parse_kast_term, read_kast_term, JsonKast, KastModel, NodeKind};
pub use kompiled::{
    read_lines, read_numbered_lines, translate_coverage_from_paths, KompiledDir, TranslationInputs,
    ALL_RULES_FILE, COMPILED_JSON_FILE,
};
pub use result::{RulecovError, RulecovResult};
pub use rules::{rule_by_id, strip_coverage_logger, PROJECTION_PREFIX};
pub use translate::{translate_coverage, CoverageTranslator, Translation, TranslationSummary};
