//! rulecov CLI: translate K rule coverage between kompiled definitions
//!
//! ## Usage
//!
//! ```bash
//! rulecov translate --src imp-coverage-kompiled --dst imp-kompiled coverage.txt
//! rulecov translate --src a --dst b --format json -o translated.json coverage.txt
//! rulecov rule --definition imp-kompiled/compiled.json --strip-coverage-logger <ID>
//! ```

use clap::Parser;
use rulecov_cli::{handlers, logging, Cli, CliConfig, CliResult, Commands, Reporter, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init(&config);

    match run(&config, &cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Reporter::new(config.color.should_color(), config.verbosity.is_quiet())
                .failure(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CliConfig, command: &Commands) -> CliResult<()> {
    match command {
        Commands::Translate(args) => handlers::execute_translate(config, args),
        Commands::Rule(args) => handlers::execute_rule(args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.clone().into())
}
