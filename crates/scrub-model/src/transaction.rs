//! Parsed claim transaction structure.
//!
//! A `ParsedTransaction` is built once per input document by the parser in
//! `scrub-parse` and is never mutated afterwards. Rule evaluation treats it
//! as read-only, so one transaction can be shared across evaluators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::segment::Segment;

/// 837 transaction category.
///
/// Professional (837P) and institutional (837I) transactions share most of
/// their structure at the depth this parser inspects; the distinction matters
/// for rule applicability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Professional,
    Institutional,
    #[default]
    Unknown,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Professional => "professional",
            TransactionType::Institutional => "institutional",
            TransactionType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "professional" => Ok(TransactionType::Professional),
            "institutional" => Ok(TransactionType::Institutional),
            "unknown" => Ok(TransactionType::Unknown),
            _ => Err(format!("Unknown transaction type: {s}")),
        }
    }
}

/// One service line within a claim.
///
/// The tag is kept because it distinguishes professional (`SV1`) from
/// institutional (`SV2`) lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLine {
    pub tag: String,
    pub elements: Vec<String>,
}

/// One billing claim reconstructed from the segment stream.
///
/// `segments` is the verbatim log of every segment observed while this claim
/// was the current parsing context, including the opening `CLM` segment. The
/// typed collections (`service_lines`, `diagnoses`, ...) are projections of a
/// subset of those segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Elements of the opening `CLM` segment, empty if the claim was opened
    /// implicitly by a child segment arriving before any `CLM`.
    pub claim_fields: Vec<String>,
    pub service_lines: Vec<ServiceLine>,
    pub diagnoses: Vec<Vec<String>>,
    pub references: Vec<Vec<String>>,
    pub patient: Option<Vec<String>>,
    pub segments: Vec<Segment>,
}

impl Claim {
    /// True when any logged segment carries the given tag.
    pub fn has_segment(&self, tag: &str) -> bool {
        self.segments.iter().any(|segment| segment.tag == tag)
    }

    /// Total claim charge amount from CLM02, when present and numeric.
    pub fn amount(&self) -> Option<f64> {
        self.claim_fields.get(1)?.trim().parse().ok()
    }
}

/// Root aggregate produced by the parser.
///
/// Invariant: every decoded segment of the source document lives in exactly
/// one of `header_segments` or one claim's `segments`, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTransaction {
    pub transaction_type: TransactionType,
    /// Raw GS08 implementation guide identifier when classification came from
    /// it, empty when the type was inferred structurally or not at all.
    pub transaction_type_source: String,
    pub header_segments: Vec<Segment>,
    pub claims: Vec<Claim>,
}

impl ParsedTransaction {
    /// Number of decoded segments across the header bucket and all claims.
    pub fn segment_count(&self) -> usize {
        self.header_segments.len()
            + self
                .claims
                .iter()
                .map(|claim| claim.segments.len())
                .sum::<usize>()
    }

    /// True when any claim logged a segment with the given tag.
    pub fn any_claim_has_segment(&self, tag: &str) -> bool {
        self.claims.iter().any(|claim| claim.has_segment(tag))
    }

    /// True when the header bucket contains a segment with the given tag.
    pub fn header_has_segment(&self, tag: &str) -> bool {
        self.header_segments.iter().any(|segment| segment.tag == tag)
    }
}
