#![forbid(unsafe_code)]

//! Ignore rules and the rules-file loader

mod ignore_rule;
mod rule_set;

pub use ignore_rule::{IgnoreRule, RuleOutcome};
pub use rule_set::{DEFAULT_RULES_FILE, RuleSet};
