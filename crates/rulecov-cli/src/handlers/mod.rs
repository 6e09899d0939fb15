//! Command handlers - extracted from main.rs for testability
//!
//! Each handler module contains the execution logic for one CLI command,
//! its pure helper functions, and their tests.

pub mod rule;
pub mod translate;

pub use rule::{execute_rule, find_rule};
pub use translate::{build_translate_config, execute_translate, resolve_inputs};
