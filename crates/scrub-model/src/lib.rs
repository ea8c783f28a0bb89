pub mod finding;
pub mod rule;
pub mod segment;
pub mod transaction;

pub use finding::Finding;
pub use rule::{Condition, Rule, Severity};
pub use segment::Segment;
pub use transaction::{Claim, ParsedTransaction, ServiceLine, TransactionType};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finding_from_rule_carries_rule_metadata() {
        let rule = Rule {
            id: "CLM-001".to_string(),
            severity: "critical".to_string(),
            message: "Claim is missing diagnosis information".to_string(),
            fix: "Add an HI segment".to_string(),
            conditions: vec![],
        };
        let finding = Finding::from_rule(&rule);
        assert_eq!(finding.issue_id, "CLM-001");
        assert_eq!(finding.severity, Severity::Critical);
        assert_eq!(finding.why_failed, "Claim is missing diagnosis information");
        assert_eq!(finding.what_to_fix, "Add an HI segment");
        assert_eq!(finding.reference, "CLM-001");
    }

    #[test]
    fn transaction_serializes_round_trip() {
        let transaction = ParsedTransaction {
            transaction_type: TransactionType::Professional,
            transaction_type_source: "005010X222".to_string(),
            header_segments: vec![Segment::new("ST", vec!["837", "0001"])],
            claims: vec![Claim {
                claim_fields: vec!["10001".to_string(), "150".to_string()],
                ..Claim::default()
            }],
        };
        let json = serde_json::to_string(&transaction).expect("serialize transaction");
        let round: ParsedTransaction = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round, transaction);
    }
}
