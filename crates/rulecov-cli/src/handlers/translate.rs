//! Translate command handler

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{render_translation, Reporter};
use crate::TranslateArgs;
use rulecov::{
    translate_coverage_from_paths, DuplicatePolicy, KompiledDir, TranslateConfig,
    TranslationInputs,
};
use std::io::Write;
use std::path::{Path, PathBuf};

fn pick(
    explicit: Option<&PathBuf>,
    dir: Option<&PathBuf>,
    file: fn(&KompiledDir) -> PathBuf,
    what: &str,
) -> CliResult<PathBuf> {
    explicit
        .cloned()
        .or_else(|| dir.map(|d| file(&KompiledDir::new(d))))
        .ok_or_else(|| CliError::invalid_argument(format!("no {what} given")))
}

/// Resolve input file paths from kompiled directories and overrides
pub fn resolve_inputs(args: &TranslateArgs) -> CliResult<TranslationInputs> {
    Ok(TranslationInputs {
        src_rules: pick(
            args.src_rules.as_ref(),
            args.src.as_ref(),
            KompiledDir::all_rules,
            "source rule table",
        )?,
        dst_rules: pick(
            args.dst_rules.as_ref(),
            args.dst.as_ref(),
            KompiledDir::all_rules,
            "destination rule table",
        )?,
        dst_definition: pick(
            args.dst_definition.as_ref(),
            args.dst.as_ref(),
            KompiledDir::compiled_json,
            "destination definition",
        )?,
        observed: args.observed.clone(),
    })
}

/// Translation config: file values first, then flag overrides
pub fn build_translate_config(args: &TranslateArgs) -> CliResult<TranslateConfig> {
    let mut config = match args.config {
        Some(ref path) => TranslateConfig::from_yaml_file(path)?,
        None => TranslateConfig::default(),
    };
    if args.strict_duplicates {
        config.duplicate_policy = DuplicatePolicy::Reject;
    }
    if let Some(ref label) = args.top_label {
        if label.trim().is_empty() {
            return Err(CliError::invalid_argument("--top-label must not be empty"));
        }
        config.top_label.clone_from(label);
    }
    Ok(config)
}

fn write_output(path: Option<&Path>, rendered: &str) -> CliResult<()> {
    match path {
        Some(path) => std::fs::write(path, rendered).map_err(|source| CliError::Output {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Execute the translate command
pub fn execute_translate(config: &CliConfig, args: &TranslateArgs) -> CliResult<()> {
    let inputs = resolve_inputs(args)?;
    let translate_config = build_translate_config(args)?;
    tracing::debug!(?inputs, ?translate_config, "translating coverage");

    let translation = translate_coverage_from_paths(&inputs, &translate_config)?;
    let rendered = render_translation(&translation, args.format)?;
    write_output(args.output.as_deref(), &rendered)?;

    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
    if config.verbosity.is_verbose() {
        reporter.summary(translation.summary());
    }
    if let Some(ref path) = args.output {
        reporter.success(&format!("Coverage written to {}", path.display()));
    }
    Ok(())
}
