//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// rulecov: translate K rule coverage between kompiled definitions
#[derive(Parser, Debug)]
#[command(name = "rulecov")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate rule coverage from one kompiled definition to another
    Translate(TranslateArgs),

    /// Print a rule of a compiled definition by its UNIQUE_ID
    Rule(RuleArgs),
}

/// Arguments for the translate command
#[derive(Parser, Debug)]
pub struct TranslateArgs {
    /// Observed coverage file (one rule identifier per line)
    pub observed: PathBuf,

    /// Kompiled directory the coverage was recorded against
    #[arg(long, required_unless_present = "src_rules")]
    pub src: Option<PathBuf>,

    /// Kompiled directory to translate coverage into
    #[arg(long, required_unless_present_all = ["dst_rules", "dst_definition"])]
    pub dst: Option<PathBuf>,

    /// Source rule table (overrides <SRC>/allRules.txt)
    #[arg(long)]
    pub src_rules: Option<PathBuf>,

    /// Destination rule table (overrides <DST>/allRules.txt)
    #[arg(long)]
    pub dst_rules: Option<PathBuf>,

    /// Destination compiled definition (overrides <DST>/compiled.json)
    #[arg(long)]
    pub dst_definition: Option<PathBuf>,

    /// Write the translated list here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,

    /// Fail on duplicate keys in either rule table
    #[arg(long)]
    pub strict_duplicates: bool,

    /// Label of the top configuration cell
    #[arg(long)]
    pub top_label: Option<String>,

    /// YAML translation config file
    #[arg(long, env = "RULECOV_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for the rule command
#[derive(Parser, Debug)]
pub struct RuleArgs {
    /// Rule identifier to look up
    pub rule: String,

    /// Compiled definition (compiled.json)
    #[arg(short, long)]
    pub definition: PathBuf,

    /// Remove the coverage logger inserted by `kompile --coverage`
    #[arg(long)]
    pub strip_coverage_logger: bool,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// One rule identifier per line
    #[default]
    Text,
    /// JSON object with kept and skipped rules
    Json,
}

/// Color choice argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
