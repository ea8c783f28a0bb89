//! End-to-end parser tests over whole documents.

use scrub_model::TransactionType;
use scrub_parse::parse_transaction;

const SAMPLE_837P: &str = concat!(
    "ISA*00*          *00*          *ZZ*SUBMITTER*ZZ*RECEIVER*251201*1253*^*00501*000000905*0*P*:~",
    "GS*HC*S*R*20251201*1253*1*X*005010X222~",
    "ST*837*0001~",
    "CLM*10001*150~",
    "SV1*HC:99214*150~",
    "HI*ABK:Z23~",
    "SE*6*0001~",
);

#[test]
fn sample_professional_document_parses() {
    let parsed = parse_transaction(SAMPLE_837P);

    assert_eq!(parsed.transaction_type, TransactionType::Professional);
    assert_eq!(parsed.transaction_type_source, "005010X222");
    assert_eq!(parsed.claims.len(), 1);

    let claim = &parsed.claims[0];
    assert_eq!(claim.claim_fields, vec!["10001", "150"]);
    assert_eq!(claim.amount(), Some(150.0));
    assert_eq!(claim.service_lines.len(), 1);
    assert_eq!(claim.service_lines[0].tag, "SV1");
    assert_eq!(claim.diagnoses.len(), 1);
    assert_eq!(claim.diagnoses[0], vec!["ABK:Z23"]);

    // ISA, GS, ST before the claim; CLM, SV1, HI, SE inside it.
    assert_eq!(parsed.header_segments.len(), 3);
    assert_eq!(claim.segments.len(), 4);
    assert_eq!(parsed.segment_count(), 7);
}

#[test]
fn parsing_twice_is_deterministic() {
    let first = parse_transaction(SAMPLE_837P);
    let second = parse_transaction(SAMPLE_837P);
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).expect("serialize");
    let second_json = serde_json::to_string(&second).expect("serialize");
    assert_eq!(first_json, second_json);
}

#[test]
fn newline_delimited_document_parses_the_same() {
    let newline_doc = SAMPLE_837P.replace('~', "\n");
    let from_tilde = parse_transaction(SAMPLE_837P);
    let from_lines = parse_transaction(&newline_doc);
    assert_eq!(from_tilde, from_lines);
}

#[test]
fn empty_document_is_a_valid_empty_result() {
    let parsed = parse_transaction("");
    assert_eq!(parsed.transaction_type, TransactionType::Unknown);
    assert!(parsed.header_segments.is_empty());
    assert!(parsed.claims.is_empty());
}

#[test]
fn headers_only_document_has_zero_claims() {
    let parsed = parse_transaction("ISA*00*X~GS*HC*S*R~ST*837*0001~SE*2*0001~");
    assert!(parsed.claims.is_empty());
    assert_eq!(parsed.header_segments.len(), 4);
}

#[test]
fn institutional_identifier_wins_over_professional_lines() {
    let doc = "GS*HC*S*R*20251201*1253*1*X*005010X223~CLM*20001*900~SV1*HC:99214*900~";
    let parsed = parse_transaction(doc);
    assert_eq!(parsed.transaction_type, TransactionType::Institutional);
    assert_eq!(parsed.transaction_type_source, "005010X223");
}

#[test]
fn two_claims_partition_their_segments() {
    let doc = "ST*837*0001~CLM*c1*100~HI*ABK:Z23~CLM*c2*200~SV1*HC:99214*200~SE*6*0001~";
    let parsed = parse_transaction(doc);
    assert_eq!(parsed.claims.len(), 2);
    assert_eq!(parsed.header_segments.len(), 1);
    assert_eq!(parsed.claims[0].segments.len(), 2);
    assert_eq!(parsed.claims[1].segments.len(), 3);
    assert_eq!(parsed.segment_count(), 6);
}
