//! Output formatting and status reporting

use crate::commands::FormatArg;
use crate::error::CliResult;
use console::{style, Style, Term};
use rulecov::{Translation, TranslationSummary};
use std::fmt::{Display, Write as _};

/// Render a translation for stdout or an output file
pub fn render_translation(translation: &Translation, format: FormatArg) -> CliResult<String> {
    match format {
        FormatArg::Text => {
            let mut out = String::new();
            for rule in &translation.rules {
                let _ = writeln!(out, "{rule}");
            }
            Ok(out)
        }
        FormatArg::Json => {
            let mut out = serde_json::to_string_pretty(translation)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Status messages on stderr
#[derive(Debug)]
pub struct Reporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }

        let prefix = if self.use_color {
            style("✓").green().bold().to_string()
        } else {
            "OK".to_string()
        };

        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print a failure message
    pub fn failure(&self, message: &str) {
        // Always print failures, even in quiet mode
        let prefix = if self.use_color {
            style("✗").red().bold().to_string()
        } else {
            "ERROR".to_string()
        };

        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print translation counts
    pub fn summary(&self, summary: TranslationSummary) {
        if self.quiet {
            return;
        }

        let line = if self.use_color {
            summary_line(
                summary.observed,
                Style::new().green().bold().apply_to(summary.kept),
                Style::new().yellow().apply_to(summary.skipped),
            )
        } else {
            format_summary(summary)
        };

        let _ = self.term.write_line(&line);
    }
}

/// Plain-text summary line
#[must_use]
pub fn format_summary(summary: TranslationSummary) -> String {
    summary_line(summary.observed, summary.kept, summary.skipped)
}

fn summary_line(observed: usize, kept: impl Display, skipped: impl Display) -> String {
    format!("Translated {observed} observed rules ({kept} kept, {skipped} non-semantic skipped)")
}
