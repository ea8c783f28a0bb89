//! Transaction type classification.
//!
//! The GS08 implementation guide identifier is authoritative; the presence of
//! professional or institutional service-line tags is only a structural
//! heuristic for malformed or partial documents, so an explicit identifier
//! always wins over the fallback.

use scrub_model::{Segment, TransactionType};

/// Functional group header tag carrying the implementation guide identifier.
const FUNCTIONAL_GROUP_TAG: &str = "GS";
/// GS08 position, counting elements after the tag.
const GUIDE_ELEMENT_INDEX: usize = 7;
/// 837P implementation guide marker (005010X222 and addenda).
const PROFESSIONAL_GUIDE_MARKER: &str = "005010X222";
/// 837I implementation guide marker (005010X223 and addenda).
const INSTITUTIONAL_GUIDE_MARKER: &str = "005010X223";
/// Professional service-line tag prefix.
const PROFESSIONAL_LINE_PREFIX: &str = "SV1";
/// Institutional service-line tag prefix.
const INSTITUTIONAL_LINE_PREFIX: &str = "SV2";

/// Classify a decoded segment sequence.
///
/// Returns the transaction type and the raw GS08 value when classification
/// came from it (empty otherwise).
pub fn classify_transaction(segments: &[Segment]) -> (TransactionType, String) {
    if let Some(gs) = segments
        .iter()
        .find(|segment| segment.tag == FUNCTIONAL_GROUP_TAG)
        && let Some(guide) = gs.element(GUIDE_ELEMENT_INDEX)
    {
        if guide.contains(PROFESSIONAL_GUIDE_MARKER) {
            return (TransactionType::Professional, guide.to_string());
        }
        if guide.contains(INSTITUTIONAL_GUIDE_MARKER) {
            return (TransactionType::Institutional, guide.to_string());
        }
    }
    if segments
        .iter()
        .any(|segment| segment.tag.starts_with(PROFESSIONAL_LINE_PREFIX))
    {
        return (TransactionType::Professional, String::new());
    }
    if segments
        .iter()
        .any(|segment| segment.tag.starts_with(INSTITUTIONAL_LINE_PREFIX))
    {
        return (TransactionType::Institutional, String::new());
    }
    (TransactionType::Unknown, String::new())
}
