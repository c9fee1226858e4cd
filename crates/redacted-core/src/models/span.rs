use serde::{Deserialize, Serialize};

use crate::constants::{DATE_PLACEHOLDER, NUMBER_PLACEHOLDER, TOKEN_PLACEHOLDER};

/// Category of sensitive content a span represents.
///
/// Closed per release; each kind maps to exactly one placeholder
/// string, independent of the original span length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Number,
    Date,
    NamedEntity,
    GenericToken,
}

impl EntityKind {
    /// The fixed placeholder substituted for spans of this kind.
    pub fn placeholder(&self) -> &'static str {
        match self {
            EntityKind::Number => NUMBER_PLACEHOLDER,
            EntityKind::Date => DATE_PLACEHOLDER,
            EntityKind::NamedEntity => TOKEN_PLACEHOLDER,
            EntityKind::GenericToken => TOKEN_PLACEHOLDER,
        }
    }

    /// Overlap-resolution priority. Higher wins entirely.
    pub fn priority(&self) -> u8 {
        match self {
            EntityKind::Date => 3,
            EntityKind::Number => 2,
            EntityKind::NamedEntity => 1,
            EntityKind::GenericToken => 0,
        }
    }
}

/// A half-open byte range in the source text tagged with an entity kind.
///
/// Invariant: `start < end`, and both offsets lie on UTF-8 character
/// boundaries of the text the span was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: EntityKind,
}

impl Span {
    pub fn new(start: usize, end: usize, kind: EntityKind) -> Self {
        debug_assert!(start < end, "span must be non-empty");
        Self { start, end, kind }
    }

    /// Byte length of the span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether this span shares at least one byte with `other`.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_symmetric_and_excludes_touching() {
        let a = Span::new(0, 5, EntityKind::Number);
        let b = Span::new(3, 8, EntityKind::Date);
        let c = Span::new(5, 9, EntityKind::Date);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn date_outranks_number_outranks_entities() {
        assert!(EntityKind::Date.priority() > EntityKind::Number.priority());
        assert!(EntityKind::Number.priority() > EntityKind::NamedEntity.priority());
        assert!(EntityKind::NamedEntity.priority() > EntityKind::GenericToken.priority());
    }
}
