//! Rule-set storage and evaluation.
//!
//! `RuleStore` resolves named rule sets from a rules directory with a
//! fallback chain and per-process caching; `RuleEvaluator` matches loaded
//! rules against a `ParsedTransaction` and emits ordered findings.

mod conditions;
mod error;
mod evaluator;
mod store;

pub use conditions::{ConditionFn, EvalError, builtin_handlers};
pub use error::RulesError;
pub use evaluator::RuleEvaluator;
pub use store::{DEFAULT_RULE_SET, RULES_DIR_ENV_VAR, RuleStore, rules_root};
