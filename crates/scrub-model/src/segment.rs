use serde::{Deserialize, Serialize};

/// One tagged record within a transaction: a type code plus ordered fields.
///
/// Elements may be empty strings. Position carries meaning in X12, so an
/// absent value is preserved as `""` rather than dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub tag: String,
    pub elements: Vec<String>,
}

impl Segment {
    pub fn new(tag: impl Into<String>, elements: Vec<&str>) -> Self {
        Self {
            tag: tag.into(),
            elements: elements.into_iter().map(ToOwned::to_owned).collect(),
        }
    }

    /// Element at `index`, counting from zero after the tag.
    pub fn element(&self, index: usize) -> Option<&str> {
        self.elements.get(index).map(String::as_str)
    }

    /// First element, conventionally the qualifier position.
    pub fn qualifier(&self) -> Option<&str> {
        self.element(0)
    }
}
