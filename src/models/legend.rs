//! State legend types.

/// Insertion-ordered mapping from state label to color.
///
/// Keys are unique; inserting an existing label replaces its color in place.
/// Lookups are exact string matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelColors {
    entries: Vec<(String, String)>,
}

impl LabelColors {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the color for `label`.
    pub fn insert(&mut self, label: impl Into<String>, color: impl Into<String>) {
        let label = label.into();
        let color = color.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = color,
            None => self.entries.push((label, color)),
        }
    }

    /// Returns the color registered for `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| c.as_str())
    }

    /// Iterates over (label, color) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), c.as_str()))
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no label is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: Into<String>, C: Into<String>> FromIterator<(L, C)> for LabelColors {
    fn from_iter<I: IntoIterator<Item = (L, C)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (label, color) in iter {
            map.insert(label, color);
        }
        map
    }
}

/// A visual legend item with its filter tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    /// State label as shown to the user
    pub label: String,
    /// Swatch color
    pub color: String,
    /// Normalized tag shared with the quarters carrying this state
    pub filter_tag: String,
}
