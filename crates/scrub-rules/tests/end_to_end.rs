//! End-to-end scenario: parse a small professional document and evaluate
//! rule phrasings in both polarities against it.

use scrub_model::{Condition, Rule, TransactionType};
use scrub_parse::parse_transaction;
use scrub_rules::RuleEvaluator;

const DOCUMENT: &str =
    "GS*HC*S*R*20251201*1253*1*X*005010X222~CLM*10001*150~SV1*HC:99214*150~HI*ABK:Z23~";

fn single_condition_rule(id: &str, condition: Condition) -> Rule {
    Rule {
        id: id.to_string(),
        severity: "high".to_string(),
        message: format!("{id} fired"),
        fix: String::new(),
        conditions: vec![condition],
    }
}

#[test]
fn document_parses_as_expected() {
    let parsed = parse_transaction(DOCUMENT);
    assert_eq!(parsed.transaction_type, TransactionType::Professional);
    assert_eq!(parsed.transaction_type_source, "005010X222");
    assert_eq!(parsed.claims.len(), 1);
    assert_eq!(parsed.claims[0].service_lines.len(), 1);
    assert_eq!(parsed.claims[0].diagnoses.len(), 1);
}

#[test]
fn diagnosis_present_fires_only_in_negative_phrasing() {
    let parsed = parse_transaction(DOCUMENT);
    let evaluator = RuleEvaluator::new();

    // Diagnosis exists, so requiring its absence does not fire...
    let negative = single_condition_rule(
        "DIAG-MISSING",
        Condition::new("diagnosis_present").with_expected(false),
    );
    assert!(evaluator.evaluate(&parsed, &[negative]).is_empty());

    // ...while requiring its presence does.
    let positive =
        single_condition_rule("DIAG-PRESENT", Condition::new("diagnosis_present"));
    assert_eq!(evaluator.evaluate(&parsed, &[positive]).len(), 1);
}

#[test]
fn nonzero_amount_defeats_zero_amount_rule() {
    let parsed = parse_transaction(DOCUMENT);
    let evaluator = RuleEvaluator::new();

    let zero_amount = Rule {
        id: "AMT-ZERO".to_string(),
        severity: "critical".to_string(),
        message: "service lines present but claim amount is zero".to_string(),
        fix: "populate CLM02".to_string(),
        conditions: vec![
            Condition::new("service_line_exists"),
            Condition::new("amount_nonzero").with_expected(false),
        ],
    };
    // Amount is 150, so the second condition fails and nothing fires.
    assert!(evaluator.evaluate(&parsed, &[zero_amount]).is_empty());
}
