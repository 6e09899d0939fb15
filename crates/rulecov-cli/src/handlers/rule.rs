//! Rule command handler

use crate::error::CliResult;
use crate::RuleArgs;
use rulecov::{read_kast_term, rule_by_id, strip_coverage_logger, JsonKast};
use serde_json::Value;

/// Look up a rule and optionally strip its coverage logger
pub fn find_rule(definition: &Value, rule: &str, strip: bool) -> CliResult<Value> {
    let found = rule_by_id(&JsonKast, definition, rule)?;
    Ok(if strip {
        strip_coverage_logger(&JsonKast, found)
    } else {
        found.clone()
    })
}

/// Execute the rule command
pub fn execute_rule(args: &RuleArgs) -> CliResult<()> {
    let definition = read_kast_term(&args.definition)?;
    let rule = find_rule(&definition, &args.rule, args.strip_coverage_logger)?;
    println!("{}", serde_json::to_string_pretty(&rule)?);
    Ok(())
}
