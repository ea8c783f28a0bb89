//! Validation rule definitions as stored in rule-set JSON files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical finding severity.
///
/// Rule files carry severity as free-form text; `Severity::normalize` maps it
/// onto these five levels, defaulting to `Medium` for absent or unrecognized
/// values.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    #[default]
    Medium,
    Low,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Info => "Info",
        }
    }

    /// Map a free-form severity string onto a canonical level.
    pub fn normalize(raw: &str) -> Severity {
        raw.parse().unwrap_or_default()
    }

    /// Sort rank, most severe first.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
            Severity::Info => 4,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            "info" => Ok(Severity::Info),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

/// One condition within a rule.
///
/// `kind` selects a handler from the evaluator's registry; the remaining
/// fields are handler-specific parameters. `expected` defaults to `true` and
/// is XNOR-combined with the handler result, so every predicate supports both
/// a "must hold" and a "must not hold" phrasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub kind: String,
    /// Target segment tag for segment-presence predicates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,
    /// Comparison value for predicates that match against one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<bool>,
}

impl Condition {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            segment: None,
            value: None,
            expected: None,
        }
    }

    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = Some(segment.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_expected(mut self, expected: bool) -> Self {
        self.expected = Some(expected);
        self
    }
}

/// One pre-submission validation rule.
///
/// Conditions are ANDed in declaration order and evaluation short-circuits on
/// the first failed condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub fix: String,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}
