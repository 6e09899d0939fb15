//! File-based entry point
//!
//! Reads the two rule tables, the destination `compiled.json` and the
//! observed coverage file, then hands everything to the in-memory pipeline.

use crate::classify::SemanticRules;
use crate::config::TranslateConfig;
use crate::index::{LocationIndex, RuleIndex};
use crate::kast::{read_kast_term, JsonKast};
use crate::result::{RulecovError, RulecovResult};
use crate::translate::{CoverageTranslator, Translation};
use std::path::{Path, PathBuf};

/// Rule table file inside a kompiled directory
pub const ALL_RULES_FILE: &str = "allRules.txt";

/// Compiled definition file inside a kompiled directory
pub const COMPILED_JSON_FILE: &str = "compiled.json";

/// A `*-kompiled` output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KompiledDir {
    root: PathBuf,
}

impl KompiledDir {
    /// Wrap a directory path
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `allRules.txt`
    #[must_use]
    pub fn all_rules(&self) -> PathBuf {
        self.root.join(ALL_RULES_FILE)
    }

    /// Path of `compiled.json`
    #[must_use]
    pub fn compiled_json(&self) -> PathBuf {
        self.root.join(COMPILED_JSON_FILE)
    }
}

/// Files consumed by one translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationInputs {
    /// Rule table of the definition the coverage was recorded against
    pub src_rules: PathBuf,
    /// Rule table of the definition coverage is wanted for
    pub dst_rules: PathBuf,
    /// `compiled.json` of the destination definition
    pub dst_definition: PathBuf,
    /// Observed coverage, one rule identifier per line
    pub observed: PathBuf,
}

impl TranslationInputs {
    /// Inputs laid out as two kompiled directories plus a coverage file
    #[must_use]
    pub fn from_kompiled_dirs(
        src: &KompiledDir,
        dst: &KompiledDir,
        observed: impl Into<PathBuf>,
    ) -> Self {
        Self {
            src_rules: src.all_rules(),
            dst_rules: dst.all_rules(),
            dst_definition: dst.compiled_json(),
            observed: observed.into(),
        }
    }
}

/// Read a text file as trimmed, non-blank lines
pub fn read_lines(path: &Path) -> RulecovResult<Vec<String>> {
    Ok(read_numbered_lines(path)?
        .into_iter()
        .map(|(_, line)| line)
        .collect())
}

/// Like [`read_lines`], keeping each line's 1-based position in the file
pub fn read_numbered_lines(path: &Path) -> RulecovResult<Vec<(usize, String)>> {
    let text = std::fs::read_to_string(path).map_err(|e| RulecovError::io(path, e))?;
    Ok(text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| (line_no, line.to_string()))
        .collect())
}

/// Translate coverage given the paths of every input file
pub fn translate_coverage_from_paths(
    inputs: &TranslationInputs,
    config: &TranslateConfig,
) -> RulecovResult<Translation> {
    let source = RuleIndex::from_numbered_lines(
        read_numbered_lines(&inputs.src_rules)?,
        config.duplicate_policy,
    )?;
    let destination = LocationIndex::from_numbered_lines(
        read_numbered_lines(&inputs.dst_rules)?,
        config.duplicate_policy,
    )?;
    let definition = read_kast_term(&inputs.dst_definition)?;
    let semantic = SemanticRules::classify(&JsonKast, &definition, &config.top_label);
    let observed = read_lines(&inputs.observed)?;

    CoverageTranslator::new(&source, &destination, &semantic).translate(&observed)
}
