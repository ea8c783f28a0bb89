//! Built-in condition handlers.
//!
//! Each handler is a named predicate over the parsed transaction. The
//! evaluator dispatches on the condition's `type` tag through a registry, so
//! new predicates can be added without touching evaluation control flow.

use std::collections::BTreeMap;

use serde_json::Value;

use scrub_model::{Condition, ParsedTransaction};

/// A condition handler: inspects the transaction and reports whether the
/// predicate holds, before any `expected` polarity is applied.
pub type ConditionFn = fn(&ParsedTransaction, &Condition) -> Result<bool, EvalError>;

/// Fault raised by a handler for a structurally bad condition definition.
///
/// These surface as synthetic findings for the offending rule, never as a
/// failure of the whole evaluation.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("condition `{kind}` requires a `{param}` parameter")]
    MissingParam { kind: String, param: &'static str },

    #[error("condition `{kind}` has a non-string `value` parameter")]
    NonStringValue { kind: String },
}

/// Registry of the built-in condition vocabulary, keyed by wire name.
pub fn builtin_handlers() -> BTreeMap<&'static str, ConditionFn> {
    let mut handlers: BTreeMap<&'static str, ConditionFn> = BTreeMap::new();
    handlers.insert("txn_is", txn_is);
    handlers.insert("claim_has_segment", claim_has_segment);
    handlers.insert("claim_missing_segment", claim_missing_segment);
    handlers.insert("header_has_segment", header_has_segment);
    handlers.insert("service_line_exists", service_line_exists);
    handlers.insert("amount_nonzero", amount_nonzero);
    handlers.insert("diagnosis_present", diagnosis_present);
    handlers.insert("patient_present", patient_present);
    handlers.insert("ref_present", ref_present);
    handlers
}

fn required_segment<'a>(condition: &'a Condition) -> Result<&'a str, EvalError> {
    condition
        .segment
        .as_deref()
        .ok_or_else(|| EvalError::MissingParam {
            kind: condition.kind.clone(),
            param: "segment",
        })
}

fn required_str_value<'a>(condition: &'a Condition) -> Result<&'a str, EvalError> {
    let value = condition
        .value
        .as_ref()
        .ok_or_else(|| EvalError::MissingParam {
            kind: condition.kind.clone(),
            param: "value",
        })?;
    value.as_str().ok_or_else(|| EvalError::NonStringValue {
        kind: condition.kind.clone(),
    })
}

/// `txn_is` — transaction type equals `value` (case-insensitive).
fn txn_is(transaction: &ParsedTransaction, condition: &Condition) -> Result<bool, EvalError> {
    let value = required_str_value(condition)?;
    Ok(transaction
        .transaction_type
        .as_str()
        .eq_ignore_ascii_case(value.trim()))
}

/// `claim_has_segment` — some claim logged a segment with tag `segment`.
fn claim_has_segment(
    transaction: &ParsedTransaction,
    condition: &Condition,
) -> Result<bool, EvalError> {
    let tag = required_segment(condition)?;
    Ok(transaction.any_claim_has_segment(tag))
}

/// `claim_missing_segment` — some claim exists that lacks tag `segment`.
fn claim_missing_segment(
    transaction: &ParsedTransaction,
    condition: &Condition,
) -> Result<bool, EvalError> {
    let tag = required_segment(condition)?;
    Ok(transaction
        .claims
        .iter()
        .any(|claim| !claim.has_segment(tag)))
}

/// `header_has_segment` — the pre-claim header bucket contains tag `segment`.
fn header_has_segment(
    transaction: &ParsedTransaction,
    condition: &Condition,
) -> Result<bool, EvalError> {
    let tag = required_segment(condition)?;
    Ok(transaction.header_has_segment(tag))
}

/// `service_line_exists` — some claim carries at least one service line.
fn service_line_exists(
    transaction: &ParsedTransaction,
    _condition: &Condition,
) -> Result<bool, EvalError> {
    Ok(transaction
        .claims
        .iter()
        .any(|claim| !claim.service_lines.is_empty()))
}

/// `amount_nonzero` — some claim has a parseable CLM02 amount above zero.
fn amount_nonzero(
    transaction: &ParsedTransaction,
    _condition: &Condition,
) -> Result<bool, EvalError> {
    Ok(transaction
        .claims
        .iter()
        .any(|claim| claim.amount().is_some_and(|amount| amount > 0.0)))
}

/// `diagnosis_present` — some claim carries at least one diagnosis entry.
fn diagnosis_present(
    transaction: &ParsedTransaction,
    _condition: &Condition,
) -> Result<bool, EvalError> {
    Ok(transaction
        .claims
        .iter()
        .any(|claim| !claim.diagnoses.is_empty()))
}

/// `patient_present` — some claim carries patient demographics.
fn patient_present(
    transaction: &ParsedTransaction,
    _condition: &Condition,
) -> Result<bool, EvalError> {
    Ok(transaction.claims.iter().any(|claim| claim.patient.is_some()))
}

/// `ref_present` — some claim carries a reference entry; with a string
/// `value`, the reference qualifier (REF01) must equal it.
fn ref_present(
    transaction: &ParsedTransaction,
    condition: &Condition,
) -> Result<bool, EvalError> {
    let qualifier = match condition.value.as_ref() {
        Some(Value::String(qualifier)) => Some(qualifier.as_str()),
        Some(_) => {
            return Err(EvalError::NonStringValue {
                kind: condition.kind.clone(),
            });
        }
        None => None,
    };
    Ok(transaction.claims.iter().any(|claim| {
        claim.references.iter().any(|reference| match qualifier {
            Some(qualifier) => reference.first().is_some_and(|first| first == qualifier),
            None => true,
        })
    }))
}
