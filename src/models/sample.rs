//! Per-element sample records produced by the merge step.

/// Number of sample slots rendered for every element.
pub const SAMPLE_SLOTS: usize = 4;

/// One sample slot of an element.
///
/// All fields are already normalized: `state` and `color` are trimmed and a
/// missing value is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleRecord {
    /// Free-text cell value (identifier, comment, ...)
    pub value: String,
    /// State label, empty when unclassified
    pub state: String,
    /// Background color, possibly back-filled from the state legend
    pub color: String,
}

impl SampleRecord {
    /// Creates a sample from already-normalized parts.
    pub fn new(
        value: impl Into<String>,
        state: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            state: state.into(),
            color: color.into(),
        }
    }

    /// Returns true if value, state and color are all empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.state.is_empty() && self.color.is_empty()
    }

    /// Short description used by tooltips: the non-empty parts of state and
    /// value joined with `separator`.
    #[must_use]
    pub fn summary(&self, separator: &str) -> String {
        [self.state.as_str(), self.value.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// An element of the table joined with its sample data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedEntity {
    /// Atomic number
    pub number: u8,
    /// Element symbol
    pub symbol: &'static str,
    /// English display name
    pub name: &'static str,
    /// Exactly [`SAMPLE_SLOTS`] samples in input order
    pub samples: [SampleRecord; SAMPLE_SLOTS],
}
