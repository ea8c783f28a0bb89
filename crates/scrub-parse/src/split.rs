//! Segment splitting and decoding.
//!
//! No escaping mechanism exists in this layer: literal `~` or `*` inside
//! data values are not supported.

use scrub_model::Segment;

/// Conventional X12 segment terminator.
pub const SEGMENT_TERMINATOR: char = '~';
/// Conventional X12 element separator.
pub const ELEMENT_SEPARATOR: char = '*';

/// Tokenize raw document text into trimmed, non-empty segment strings.
///
/// If the terminator character appears anywhere, the text is split on it
/// (carriage returns stripped first); otherwise one segment per line is
/// assumed. Never fails — empty input yields an empty sequence.
pub fn split_segments(raw: &str) -> Vec<String> {
    if raw.contains(SEGMENT_TERMINATOR) {
        let stripped = raw.replace('\r', "");
        stripped
            .split(SEGMENT_TERMINATOR)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    } else {
        raw.lines()
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }
}

/// Decode one segment string into a tag and its ordered elements.
///
/// The tag is kept verbatim (no case normalization) and empty elements are
/// preserved positionally. A string with no separator yields a tag-only
/// segment.
pub fn decode_segment(segment: &str) -> Segment {
    let mut parts = segment.split(ELEMENT_SEPARATOR);
    let tag = parts.next().unwrap_or_default().to_string();
    Segment {
        tag,
        elements: parts.map(ToOwned::to_owned).collect(),
    }
}
