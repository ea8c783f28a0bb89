//! Rule evaluation against a parsed transaction.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use scrub_model::{Finding, ParsedTransaction, Rule};

use crate::conditions::{ConditionFn, EvalError, builtin_handlers};

/// Evaluates rules against a `ParsedTransaction` and emits ordered findings.
///
/// Condition types dispatch through a registry of named handlers. Unknown
/// types fail closed: the rule is a non-match, not an error. A handler fault
/// (structurally bad condition definition) is confined to its rule and
/// surfaced as a synthetic finding, so one bad rule cannot crash or silence
/// the rest of the set.
#[derive(Debug)]
pub struct RuleEvaluator {
    handlers: BTreeMap<&'static str, ConditionFn>,
}

impl Default for RuleEvaluator {
    fn default() -> Self {
        Self {
            handlers: builtin_handlers(),
        }
    }
}

impl RuleEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an additional condition handler, overriding any builtin of
    /// the same name.
    pub fn register(&mut self, kind: &'static str, handler: ConditionFn) {
        self.handlers.insert(kind, handler);
    }

    /// Evaluate all rules in order; finding order matches rule order.
    ///
    /// Never fails as a whole and never mutates the transaction.
    pub fn evaluate(&self, transaction: &ParsedTransaction, rules: &[Rule]) -> Vec<Finding> {
        let mut findings = Vec::new();
        for rule in rules {
            match self.rule_matches(transaction, rule) {
                Ok(true) => findings.push(Finding::from_rule(rule)),
                Ok(false) => {}
                Err(error) => {
                    warn!(rule = %rule.id, %error, "rule evaluation fault");
                    findings.push(Finding::evaluation_error(&rule.id, &error.to_string()));
                }
            }
        }
        findings
    }

    /// Conditions are ANDed in declaration order with short-circuiting.
    ///
    /// Each handler result is XNOR-combined with the condition's `expected`
    /// flag (defaulting to `true`), so every predicate supports both "must be
    /// present" and "must be absent" phrasings with one consistent semantic.
    fn rule_matches(
        &self,
        transaction: &ParsedTransaction,
        rule: &Rule,
    ) -> Result<bool, EvalError> {
        for condition in &rule.conditions {
            let Some(handler) = self.handlers.get(condition.kind.as_str()) else {
                debug!(
                    rule = %rule.id,
                    kind = %condition.kind,
                    "unknown condition type, treating rule as non-match"
                );
                return Ok(false);
            };
            let observed = handler(transaction, condition)?;
            let expected = condition.expected.unwrap_or(true);
            if observed != expected {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
