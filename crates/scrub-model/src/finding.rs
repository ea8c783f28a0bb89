use serde::{Deserialize, Serialize};

use crate::rule::{Rule, Severity};

/// One rule match surfaced to the caller.
///
/// Findings are an output-only projection: they carry remediation text but no
/// back-reference to the claim that triggered them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub issue_id: String,
    pub severity: Severity,
    pub why_failed: String,
    pub what_to_fix: String,
    pub reference: String,
}

impl Finding {
    /// Build a finding for a fully matched rule.
    pub fn from_rule(rule: &Rule) -> Self {
        Self {
            issue_id: rule.id.clone(),
            severity: Severity::normalize(&rule.severity),
            why_failed: rule.message.clone(),
            what_to_fix: rule.fix.clone(),
            reference: rule.id.clone(),
        }
    }

    /// Synthetic finding reporting a fault while evaluating one rule.
    ///
    /// Emitted in place of aborting evaluation, so one bad rule definition
    /// cannot silence the rest of the rule set.
    pub fn evaluation_error(rule_id: &str, detail: &str) -> Self {
        Self {
            issue_id: rule_id.to_string(),
            severity: Severity::High,
            why_failed: format!("rule evaluation error: {detail}"),
            what_to_fix: "Fix the rule definition in the rule-set file".to_string(),
            reference: rule_id.to_string(),
        }
    }
}
