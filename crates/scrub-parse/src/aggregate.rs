//! Claim aggregation: a single forward pass over the decoded segment stream.
//!
//! Claim transactions are not strictly tree-structured at this depth of
//! inspection, so a greedy "current claim" state machine is enough to
//! reconstruct usable claim boundaries without full HL nesting. Each segment
//! is classified into a `SegmentKind` and dispatched on that kind, keeping
//! the implicit-open behavior in one place instead of scattered null checks.

use scrub_model::{Claim, ParsedTransaction, Segment, ServiceLine};

/// Structural role of one segment, as far as aggregation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentKind {
    /// `CLM` — seals the current claim and opens a new one.
    ClaimOpen,
    /// `PAT`, or `NM1` with the patient qualifier `QC`.
    Patient,
    /// `REF` reference identification.
    Reference,
    /// `HI` healthcare information (diagnosis codes).
    Diagnosis,
    /// `SV1` (professional) or `SV2` (institutional) service line.
    ServiceLine,
    /// Anything else: logged, never interpreted.
    Other,
}

const PATIENT_QUALIFIER: &str = "QC";

fn kind_of(segment: &Segment) -> SegmentKind {
    match segment.tag.as_str() {
        "CLM" => SegmentKind::ClaimOpen,
        "PAT" => SegmentKind::Patient,
        "NM1" if segment.qualifier() == Some(PATIENT_QUALIFIER) => SegmentKind::Patient,
        "REF" => SegmentKind::Reference,
        "HI" => SegmentKind::Diagnosis,
        "SV1" | "SV2" => SegmentKind::ServiceLine,
        _ => SegmentKind::Other,
    }
}

#[derive(Debug, Default)]
struct ClaimAggregator {
    header_segments: Vec<Segment>,
    claims: Vec<Claim>,
    current: Option<Claim>,
}

impl ClaimAggregator {
    fn consume(&mut self, segment: Segment) {
        match kind_of(&segment) {
            SegmentKind::ClaimOpen => {
                self.seal_current();
                self.current = Some(Claim {
                    claim_fields: segment.elements.clone(),
                    ..Claim::default()
                });
            }
            // Later patient segments overwrite earlier ones within a claim.
            SegmentKind::Patient => {
                self.open_claim().patient = Some(segment.elements.clone());
            }
            SegmentKind::Reference => {
                self.open_claim().references.push(segment.elements.clone());
            }
            SegmentKind::Diagnosis => {
                self.open_claim().diagnoses.push(segment.elements.clone());
            }
            SegmentKind::ServiceLine => {
                let line = ServiceLine {
                    tag: segment.tag.clone(),
                    elements: segment.elements.clone(),
                };
                self.open_claim().service_lines.push(line);
            }
            SegmentKind::Other => {}
        }

        // Every segment lands in exactly one bucket: the current claim's
        // verbatim log, or the header bucket before any claim exists.
        match self.current.as_mut() {
            Some(claim) => claim.segments.push(segment),
            None => self.header_segments.push(segment),
        }
    }

    /// Current claim, implicitly opened when a child segment arrives before
    /// any `CLM`. Such a claim keeps empty `claim_fields`.
    fn open_claim(&mut self) -> &mut Claim {
        self.current.get_or_insert_with(Claim::default)
    }

    fn seal_current(&mut self) {
        if let Some(done) = self.current.take() {
            self.claims.push(done);
        }
    }

    fn finish(mut self) -> ParsedTransaction {
        self.seal_current();
        ParsedTransaction {
            header_segments: self.header_segments,
            claims: self.claims,
            ..ParsedTransaction::default()
        }
    }
}

/// Group a decoded segment sequence into claims.
///
/// Single linear pass, O(segment count), no backtracking. The returned
/// transaction has `transaction_type` left at its default; the caller runs
/// classification separately.
pub fn aggregate_claims(segments: Vec<Segment>) -> ParsedTransaction {
    let mut aggregator = ClaimAggregator::default();
    for segment in segments {
        aggregator.consume(segment);
    }
    aggregator.finish()
}
