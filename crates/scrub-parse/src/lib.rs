//! Tolerant parser for flat 837 claim transactions.
//!
//! This is not a conformant X12 implementation: there is no envelope
//! balancing, no HL nesting, and no implementation-guide structural
//! validation. A single forward pass over the segment stream reconstructs
//! claim boundaries well enough for rule evaluation and downstream
//! explanation, and it never fails — structurally poor input simply yields
//! an emptier `ParsedTransaction`.

mod aggregate;
mod classify;
mod split;

pub use aggregate::aggregate_claims;
pub use classify::classify_transaction;
pub use split::{ELEMENT_SEPARATOR, SEGMENT_TERMINATOR, decode_segment, split_segments};

use scrub_model::{ParsedTransaction, Segment};
use tracing::info;

/// Parse a raw 837 document into a `ParsedTransaction`.
///
/// Always succeeds; an empty or unrecognizable document produces a
/// transaction with zero claims, which callers must treat as a valid result.
pub fn parse_transaction(raw: &str) -> ParsedTransaction {
    let segments: Vec<Segment> = split_segments(raw)
        .iter()
        .map(|segment| decode_segment(segment))
        .collect();
    info!(segments = segments.len(), "decoded segment stream");

    let (transaction_type, source) = classify_transaction(&segments);
    let mut parsed = aggregate_claims(segments);
    parsed.transaction_type = transaction_type;
    parsed.transaction_type_source = source;

    info!(
        claims = parsed.claims.len(),
        transaction_type = %parsed.transaction_type,
        "parsed transaction"
    );
    parsed
}
