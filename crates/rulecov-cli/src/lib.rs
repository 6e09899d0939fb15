//! rulecov CLI library
//!
//! Command-line interface for translating K rule coverage between kompiled
//! definitions.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{Cli, ColorArg, Commands, FormatArg, RuleArgs, TranslateArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{format_summary, render_translation, Reporter};
